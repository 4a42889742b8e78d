use super::error::ValidationError;
use super::rut;
use super::types::Solicitud;

/// Validate every entry field of a solicitud.
///
/// Returns all validation errors found (not just the first), one per
/// failing field, in field order. An empty result means the solicitud
/// may proceed to submission. The function is pure; rendering the
/// failures next to their fields is the caller's concern, and re-running
/// after a fix yields a fresh set with no stale entries.
///
/// String fields are trimmed before their length checks; the phone is
/// matched exactly as entered.
pub fn validate_solicitud(solicitud: &Solicitud) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !rut::is_valid_rut_format(&solicitud.rut) {
        errors.push(ValidationError::new(
            "rut",
            "invalid RUT format, expected 12345678-9 or 12.345.678-9",
        ));
    }

    if solicitud.nombre.trim().chars().count() < 2 {
        errors.push(ValidationError::new(
            "nombre",
            "nombre must be at least 2 characters",
        ));
    }

    if solicitud.apellido_paterno.trim().chars().count() < 2 {
        errors.push(ValidationError::new(
            "apellido_paterno",
            "apellido paterno must be at least 2 characters",
        ));
    }

    if solicitud.apellido_materno.trim().chars().count() < 2 {
        errors.push(ValidationError::new(
            "apellido_materno",
            "apellido materno must be at least 2 characters",
        ));
    }

    if solicitud.direccion.trim().chars().count() < 5 {
        errors.push(ValidationError::new(
            "direccion",
            "direccion must be at least 5 characters",
        ));
    }

    if !is_valid_telefono(&solicitud.telefono) {
        errors.push(ValidationError::new(
            "telefono",
            "telefono must be 8 or 9 digits",
        ));
    }

    if solicitud.comuna.trim().chars().count() < 2 {
        errors.push(ValidationError::new(
            "comuna",
            "comuna must be at least 2 characters",
        ));
    }

    errors
}

/// Check a phone number: exactly 8 or 9 ASCII digits, nothing else.
///
/// The value is matched untrimmed; surrounding whitespace fails.
pub fn is_valid_telefono(telefono: &str) -> bool {
    (telefono.len() == 8 || telefono.len() == 9)
        && telefono.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::SolicitudBuilder;
    use chrono::{DateTime, TimeZone, Utc};

    fn fecha() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn valida() -> Solicitud {
        SolicitudBuilder::new("12.345.678-5", fecha())
            .nombre("María")
            .apellido_paterno("Pérez")
            .apellido_materno("Soto")
            .direccion("Av. Libertad 123")
            .telefono("987654321")
            .comuna("Viña del Mar")
            .build()
            .unwrap()
    }

    #[test]
    fn valid_solicitud_has_no_errors() {
        assert!(validate_solicitud(&valida()).is_empty());
    }

    #[test]
    fn bad_rut_reported() {
        let mut s = valida();
        s.rut = "12345678".into();
        let errors = validate_solicitud(&s);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "rut");
    }

    #[test]
    fn short_nombre_reported() {
        let mut s = valida();
        s.nombre = "A".into();
        let errors = validate_solicitud(&s);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "nombre");
    }

    #[test]
    fn whitespace_padding_does_not_satisfy_length() {
        let mut s = valida();
        s.apellido_materno = " B  ".into();
        let errors = validate_solicitud(&s);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "apellido_materno");
    }

    #[test]
    fn all_failures_reported_in_one_pass() {
        let mut s = valida();
        s.rut = "nope".into();
        s.nombre = "X".into();
        s.direccion = "abc".into();
        s.telefono = "12345".into();
        let errors = validate_solicitud(&s);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["rut", "nombre", "direccion", "telefono"]);
    }

    #[test]
    fn revalidation_after_fix_drops_old_error() {
        let mut s = valida();
        s.telefono = "12345".into();
        assert_eq!(validate_solicitud(&s).len(), 1);
        s.telefono = "98765432".into();
        assert!(validate_solicitud(&s).is_empty());
    }

    #[test]
    fn telefono_8_and_9_digits() {
        assert!(is_valid_telefono("98765432"));
        assert!(is_valid_telefono("987654321"));
    }

    #[test]
    fn telefono_wrong_lengths() {
        assert!(!is_valid_telefono("98765"));
        assert!(!is_valid_telefono("9876543210"));
        assert!(!is_valid_telefono(""));
    }

    #[test]
    fn telefono_is_not_trimmed() {
        assert!(!is_valid_telefono(" 98765432"));
        assert!(!is_valid_telefono("98765432 "));
    }

    #[test]
    fn telefono_rejects_non_digits() {
        assert!(!is_valid_telefono("9876543a"));
        assert!(!is_valid_telefono("+5698765432"));
    }
}
