use thiserror::Error;

/// Errors that can occur while constructing or processing a solicitud.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TramiteError {
    /// One or more field validations failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// A string could not be parsed into an [`Estado`](crate::core::Estado).
    #[error("unknown estado: {0}")]
    Estado(String),
}

/// A single validation failure with field name and message.
///
/// Validation never raises; each pass returns the full set of failures
/// so every invalid field can be reported at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the invalid field (e.g. "rut", "apellido_paterno").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error for a named field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
