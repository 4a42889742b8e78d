//! Core solicitud types, field validation, and RUT format checks.
//!
//! This module provides the foundational types for the gas-subsidy
//! registration flow, with the field-level checks applied at submission.

mod builder;
mod error;
pub mod rut;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use rut::{is_valid_rut_format, normalize_rut};
pub use types::*;
pub use validation::*;
