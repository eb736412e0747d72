//! Utilidades de validación de campos de entrada
//!
//! Los requests usan `Option` en todos los campos: estas funciones separan
//! "campo ausente" de "campo presente pero vacío" y validan cada caso.

use uuid::Uuid;

use crate::models::LicenseClass;
use crate::utils::errors::{validation_error, AppResult};

/// Campo de texto obligatorio: debe estar presente y no ser vacío
pub fn require_text(value: Option<String>, field: &'static str) -> AppResult<String> {
    match value {
        None => Err(validation_error(field, "is required")),
        Some(v) if v.trim().is_empty() => Err(validation_error(field, "must not be empty")),
        Some(v) => Ok(v),
    }
}

/// Campo de texto opcional: puede faltar, pero si viene no puede ser vacío
pub fn optional_text(value: Option<String>, field: &'static str) -> AppResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Err(validation_error(field, "must not be empty")),
        Some(v) => Ok(Some(v)),
    }
}

/// Clase de licencia obligatoria
pub fn require_license(value: Option<String>, field: &'static str) -> AppResult<LicenseClass> {
    match value {
        None => Err(validation_error(field, "is required")),
        Some(v) => v
            .parse::<LicenseClass>()
            .map_err(|_| validation_error(field, "must be one of A, B, C, D, E")),
    }
}

/// Clase de licencia opcional
pub fn optional_license(
    value: Option<String>,
    field: &'static str,
) -> AppResult<Option<LicenseClass>> {
    match value {
        None => Ok(None),
        Some(v) => v
            .parse::<LicenseClass>()
            .map(Some)
            .map_err(|_| validation_error(field, "must be one of A, B, C, D, E")),
    }
}

/// Identificador obligatorio
pub fn require_id(value: Option<Uuid>, field: &'static str) -> AppResult<Uuid> {
    value.ok_or_else(|| validation_error(field, "is required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(Some("Ana".to_string()), "name").unwrap(), "Ana");
        assert!(require_text(None, "name").is_err());
        assert!(require_text(Some("".to_string()), "name").is_err());
        assert!(require_text(Some("   ".to_string()), "name").is_err());
    }

    #[test]
    fn test_optional_text_distinguishes_absent_from_empty() {
        assert_eq!(optional_text(None, "plate").unwrap(), None);
        assert_eq!(
            optional_text(Some("ABC1234".to_string()), "plate").unwrap(),
            Some("ABC1234".to_string())
        );
        assert!(optional_text(Some("".to_string()), "plate").is_err());
    }

    #[test]
    fn test_require_license() {
        assert_eq!(
            require_license(Some("C".to_string()), "license_type").unwrap(),
            LicenseClass::C
        );
        assert!(require_license(None, "license_type").is_err());
        assert!(require_license(Some("X".to_string()), "license_type").is_err());
        assert!(require_license(Some("c".to_string()), "license_type").is_err());
    }

    #[test]
    fn test_optional_license() {
        assert_eq!(optional_license(None, "min_license_type").unwrap(), None);
        assert_eq!(
            optional_license(Some("E".to_string()), "min_license_type").unwrap(),
            Some(LicenseClass::E)
        );
        assert!(optional_license(Some("Z".to_string()), "min_license_type").is_err());
    }

    #[test]
    fn test_require_id() {
        let id = Uuid::new_v4();
        assert_eq!(require_id(Some(id), "driver_id").unwrap(), id);
        assert!(require_id(None, "driver_id").is_err());
    }
}
