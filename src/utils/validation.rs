//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de fechas y horas recibidas como texto.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use validator::{ValidationError, ValidationErrors};

use crate::utils::errors::AppError;

/// Formato de salida de los timestamps (ISO 8601 sin zona); la fracción
/// de segundo sólo aparece cuando no es cero
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Formato de salida de las fechas
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Validar y convertir string a datetime
///
/// Acepta ISO 8601 sin zona (separador `T` o espacio, segundos opcionales)
/// y RFC 3339 con offset, que se normaliza a UTC.
pub fn validate_datetime(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let value = value.trim();

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).naive_utc())
        .map_err(|_| {
            let mut error = ValidationError::new("datetime");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"YYYY-MM-DDTHH:MM:SS".to_string());
            error
        })
}

/// Validar y convertir string a fecha
///
/// Un datetime completo también se acepta; la hora se descarta.
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }

    validate_datetime(trimmed).map(|dt| dt.date()).map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &trimmed.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Parsear un campo datetime y reportar el error con el nombre del campo
pub fn parse_datetime_field(field: &'static str, value: &str) -> Result<NaiveDateTime, AppError> {
    validate_datetime(value).map_err(|e| field_error(field, e))
}

/// Parsear un campo fecha y reportar el error con el nombre del campo
pub fn parse_date_field(field: &'static str, value: &str) -> Result<NaiveDate, AppError> {
    validate_date(value).map_err(|e| field_error(field, e))
}

fn field_error(field: &'static str, error: ValidationError) -> AppError {
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    AppError::Validation(errors)
}

/// Serializar un timestamp en el formato de la API
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Serializar una fecha en el formato de la API
pub fn format_date(value: &NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_validate_datetime_iso() {
        let dt = validate_datetime("2024-01-01T08:00:00").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }

    #[test]
    fn test_validate_datetime_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(11, 30, 0)
            .unwrap();

        assert_eq!(validate_datetime("2024-01-01 11:30:00").unwrap(), expected);
        assert_eq!(validate_datetime("2024-01-01T11:30").unwrap(), expected);
        assert_eq!(validate_datetime("2024-01-01T13:30:00+02:00").unwrap(), expected);
    }

    #[test]
    fn test_validate_datetime_invalid() {
        assert!(validate_datetime("mañana a las ocho").is_err());
        assert!(validate_datetime("2024-13-01T08:00:00").is_err());
        assert!(validate_datetime("").is_err());
    }

    #[test]
    fn test_validate_date_discards_time() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(validate_date("2024-01-01").unwrap(), expected);
        assert_eq!(validate_date("2024-01-01T23:59:59").unwrap(), expected);
        assert!(validate_date("01/01/2024").is_err());
    }

    #[test]
    fn test_parse_field_reports_validation_error() {
        let err = parse_datetime_field("departureTime", "not-a-date").unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("departureTime"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_format_round_trip() {
        let dt = validate_datetime("2024-01-01T08:00:00").unwrap();
        assert_eq!(format_datetime(&dt), "2024-01-01T08:00:00");

        let date = validate_date("2024-01-01").unwrap();
        assert_eq!(format_date(&date), "2024-01-01");
    }

    #[test]
    fn test_format_keeps_fractional_seconds() {
        let dt = validate_datetime("2024-01-01T08:00:00.500").unwrap();
        assert_eq!(format_datetime(&dt), "2024-01-01T08:00:00.500");
    }
}
