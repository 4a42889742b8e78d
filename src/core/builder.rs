use chrono::{DateTime, Utc};

use super::error::TramiteError;
use super::types::{Estado, Solicitud};
use super::validation;

/// Builder for constructing validated solicitudes.
///
/// ```
/// use tramite::core::*;
/// use chrono::{TimeZone, Utc};
///
/// let solicitud = SolicitudBuilder::new("12.345.678-5", Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap())
///     .nombre("María")
///     .apellido_paterno("Pérez")
///     .apellido_materno("Soto")
///     .direccion("Av. Libertad 123")
///     .telefono("987654321")
///     .comuna("Viña del Mar")
///     .build()
///     .unwrap();
///
/// assert_eq!(solicitud.estado, Estado::Pendiente);
/// ```
pub struct SolicitudBuilder {
    rut: String,
    nombre: String,
    apellido_paterno: String,
    apellido_materno: String,
    direccion: String,
    telefono: String,
    comuna: String,
    fecha_solicitud: DateTime<Utc>,
}

impl SolicitudBuilder {
    pub fn new(rut: impl Into<String>, fecha_solicitud: DateTime<Utc>) -> Self {
        Self {
            rut: rut.into(),
            nombre: String::new(),
            apellido_paterno: String::new(),
            apellido_materno: String::new(),
            direccion: String::new(),
            telefono: String::new(),
            comuna: String::new(),
            fecha_solicitud,
        }
    }

    pub fn nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = nombre.into();
        self
    }

    pub fn apellido_paterno(mut self, apellido: impl Into<String>) -> Self {
        self.apellido_paterno = apellido.into();
        self
    }

    pub fn apellido_materno(mut self, apellido: impl Into<String>) -> Self {
        self.apellido_materno = apellido.into();
        self
    }

    pub fn direccion(mut self, direccion: impl Into<String>) -> Self {
        self.direccion = direccion.into();
        self
    }

    pub fn telefono(mut self, telefono: impl Into<String>) -> Self {
        self.telefono = telefono.into();
        self
    }

    pub fn comuna(mut self, comuna: impl Into<String>) -> Self {
        self.comuna = comuna.into();
        self
    }

    /// Build the solicitud, running every field validation.
    ///
    /// A new solicitud always starts in [`Estado::Pendiente`].
    pub fn build(self) -> Result<Solicitud, TramiteError> {
        let solicitud = Solicitud {
            rut: self.rut,
            nombre: self.nombre,
            apellido_paterno: self.apellido_paterno,
            apellido_materno: self.apellido_materno,
            direccion: self.direccion,
            telefono: self.telefono,
            comuna: self.comuna,
            fecha_solicitud: self.fecha_solicitud,
            fecha_aceptacion: None,
            estado: Estado::Pendiente,
        };

        let errors = validation::validate_solicitud(&solicitud);
        if !errors.is_empty() {
            let msgs: Vec<String> = errors.iter().map(ToString::to_string).collect();
            return Err(TramiteError::Validation(msgs.join("; ")));
        }

        Ok(solicitud)
    }

    /// Build without validating.
    ///
    /// For intake paths that collect partial data and validate later
    /// with [`validation::validate_solicitud`].
    pub fn build_unchecked(self) -> Solicitud {
        Solicitud {
            rut: self.rut,
            nombre: self.nombre,
            apellido_paterno: self.apellido_paterno,
            apellido_materno: self.apellido_materno,
            direccion: self.direccion,
            telefono: self.telefono,
            comuna: self.comuna,
            fecha_solicitud: self.fecha_solicitud,
            fecha_aceptacion: None,
            estado: Estado::Pendiente,
        }
    }
}
