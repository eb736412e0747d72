//! Controllers
//!
//! Orquestación por entidad: validación de entrada, snapshots de estado,
//! reglas de asignación y commits contra los repositorios.

pub mod assignment_controller;
pub mod driver_controller;
pub mod truck_controller;

pub use assignment_controller::AssignmentController;
pub use driver_controller::DriverController;
pub use truck_controller::TruckController;
