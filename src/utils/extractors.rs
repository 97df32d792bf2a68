//! Extractores de Axum
//!
//! Envuelven `Json` y `Path` para que los rechazos se conviertan en
//! `AppError` y respondan con el mismo formato que el resto de la API.

use axum::extract::{FromRequest, FromRequestParts};

use crate::utils::errors::AppError;

/// Body JSON tipado; campos faltantes o mal formados producen un error de validación
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Parámetro de ruta tipado
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
