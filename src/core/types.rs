use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::TramiteError;

/// A gas-subsidy registration request as submitted by a citizen.
///
/// Field values are kept exactly as entered; validation reads them at
/// submission time and reports every failure in one pass. Timestamps
/// are supplied by the caller, never read from the clock here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solicitud {
    /// National tax identifier, with or without thousands dots
    /// (e.g. "12.345.678-5" or "12345678-5").
    pub rut: String,
    /// Given name.
    pub nombre: String,
    /// Paternal surname.
    pub apellido_paterno: String,
    /// Maternal surname.
    pub apellido_materno: String,
    /// Street address.
    pub direccion: String,
    /// Phone number, 8 or 9 digits without prefix.
    pub telefono: String,
    /// Comuna of residence. Free text; the autocomplete is a UX
    /// affordance, not a constraint.
    pub comuna: String,
    /// When the request was submitted.
    pub fecha_solicitud: DateTime<Utc>,
    /// Set while the request is in [`Estado::Aceptada`], cleared on any
    /// other transition.
    pub fecha_aceptacion: Option<DateTime<Utc>>,
    /// Review state.
    pub estado: Estado,
}

impl Solicitud {
    /// Move the request to a new review state.
    ///
    /// Entering [`Estado::Aceptada`] stamps `fecha_aceptacion` with the
    /// given time; every other target state clears it.
    pub fn cambiar_estado(&mut self, nuevo: Estado, ahora: DateTime<Utc>) {
        self.fecha_aceptacion = match nuevo {
            Estado::Aceptada => Some(ahora),
            _ => None,
        };
        self.estado = nuevo;
    }

    /// Full display name: "nombre apellido_paterno apellido_materno".
    pub fn nombre_completo(&self) -> String {
        format!(
            "{} {} {}",
            self.nombre, self.apellido_paterno, self.apellido_materno
        )
    }
}

impl std::fmt::Display for Solicitud {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.nombre_completo(), self.rut)
    }
}

/// Review state of a solicitud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Estado {
    /// Submitted, awaiting review.
    #[default]
    Pendiente,
    /// Approved; `fecha_aceptacion` records when.
    Aceptada,
    /// Rejected by a reviewer.
    Rechazada,
    /// Lapsed without a decision.
    Expirada,
}

impl Estado {
    /// All states, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pendiente,
        Self::Aceptada,
        Self::Rechazada,
        Self::Expirada,
    ];

    /// Display name as shown to users.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Aceptada => "Aceptada",
            Self::Rechazada => "Rechazada",
            Self::Expirada => "Expirada",
        }
    }
}

impl std::fmt::Display for Estado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Estado {
    type Err = TramiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| TramiteError::Estado(s.to_string()))
    }
}
