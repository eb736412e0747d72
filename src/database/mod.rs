//! Acceso a base de datos
//!
//! Este módulo maneja la conexión a PostgreSQL y el bootstrap del schema.

pub mod connection;

pub use connection::*;
