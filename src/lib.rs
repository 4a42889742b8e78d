//! # tramite
//!
//! Chilean civic form toolkit: región/comuna directory, comuna
//! autocomplete, and field validation for registration forms.
//!
//! The validation here is the advisory, client-facing kind; whatever
//! receives a submitted solicitud must re-validate on its own terms.
//! RUT checks are shape-only and never verify the check digit.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tramite::core::*;
//!
//! let solicitud = SolicitudBuilder::new("12.345.678-5", Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap())
//!     .nombre("María")
//!     .apellido_paterno("Pérez")
//!     .apellido_materno("Soto")
//!     .direccion("Av. Libertad 123")
//!     .telefono("987654321")
//!     .comuna("Viña del Mar")
//!     .build()
//!     .unwrap();
//!
//! assert!(validate_solicitud(&solicitud).is_empty());
//! assert_eq!(solicitud.estado, Estado::Pendiente);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Solicitud types, field validation, RUT format checks |
//! | `directory` | Static región → comuna lookup table |
//! | `autocomplete` | Headless comuna autocomplete state machine |
//! | `export` | Directory JSON export for embedding as a page asset |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "directory")]
pub mod directory;

#[cfg(feature = "autocomplete")]
pub mod autocomplete;

#[cfg(feature = "export")]
pub mod export;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
