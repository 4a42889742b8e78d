//! Headless comuna autocomplete.
//!
//! A state machine over the región selector, the comuna text input,
//! and the suggestion panel. Each host interaction maps to one method
//! ([`ComunaAutocomplete::select_region`],
//! [`ComunaAutocomplete::input_changed`],
//! [`ComunaAutocomplete::choose_suggestion`],
//! [`ComunaAutocomplete::click_outside`]) so every transition can be
//! driven and asserted on without a rendering surface. Drawing the
//! panel is left to the host; [`render`] provides a default mapping to
//! displayable items.

mod controller;
pub mod render;

pub use controller::*;
