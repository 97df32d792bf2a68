//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! de fechas y extractores HTTP comunes.

pub mod errors;
pub mod extractors;
pub mod validation;
