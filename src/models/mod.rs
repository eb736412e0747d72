//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod assignment;
pub mod driver;
pub mod license;
pub mod truck;

pub use assignment::Assignment;
pub use driver::Driver;
pub use license::LicenseClass;
pub use truck::Truck;
