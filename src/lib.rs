//! Backend de gestión de autobuses
//!
//! API REST sobre cuatro tablas relacionadas: autobuses, rutas, horarios
//! y reservas.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
