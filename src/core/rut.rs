//! RUT (Rol Único Tributario) format validation.
//!
//! Shape checks only. None of these functions verify the check digit
//! mathematically; a well-formed RUT with a wrong verifier passes.

use std::fmt;

/// Error returned when a RUT fails format validation.
#[derive(Debug, Clone)]
pub struct RutFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for RutFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid RUT '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for RutFormatError {}

/// Check a RUT against the strict entry format.
///
/// Accepts a body of 1 to 10 characters drawn from digits and '.',
/// a dash, and a single verifier character (digit or 'k'/'K'), so
/// both "12345678-9" and "12.345.678-9" pass. Leading and trailing
/// whitespace is trimmed first.
pub fn is_valid_rut_format(rut: &str) -> bool {
    let rut = rut.trim();
    let Some((cuerpo, verificador)) = rut.rsplit_once('-') else {
        return false;
    };

    if cuerpo.is_empty() || cuerpo.chars().count() > 10 {
        return false;
    }
    if !cuerpo.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return false;
    }

    let mut chars = verificador.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_digit() || c == 'k' || c == 'K'
    )
}

/// Clean a RUT for storage, applying the looser intake rules.
///
/// Strips embedded spaces, then requires 7 to 12 characters drawn from
/// digits, dots, dash and 'k'/'K'. Returns the cleaned value with its
/// original punctuation; dots are not removed.
pub fn normalize_rut(rut: &str) -> Result<String, RutFormatError> {
    let limpio: String = rut.chars().filter(|c| !c.is_whitespace()).collect();

    if !(7..=12).contains(&limpio.chars().count()) {
        return Err(RutFormatError {
            value: rut.into(),
            reason: format!(
                "expected 7 to 12 characters including dash and verifier, got {}",
                limpio.chars().count()
            ),
        });
    }

    if !limpio
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | 'k' | 'K'))
    {
        return Err(RutFormatError {
            value: rut.into(),
            reason: "only digits, dots, dash and K are allowed".into(),
        });
    }

    Ok(limpio)
}
