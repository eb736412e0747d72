//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación. Las reglas de
//! asignación son funciones puras sobre estado explícito, sin acceso a base
//! de datos.

pub mod assignment_validation;

pub use assignment_validation::*;
