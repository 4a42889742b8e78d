//! Default mapping from panel state to displayable items.
//!
//! Hosts that draw their own panel can ignore this and match on
//! [`Panel`] directly.

use super::Panel;

/// Placeholder text shown when no comuna matches the input.
pub const SIN_RESULTADOS: &str = "No se encontraron comunas";

/// One row of the rendered suggestion panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Text to display.
    pub texto: String,
    /// Whether activating the row counts as choosing a suggestion.
    /// The "no results" placeholder is not selectable.
    pub seleccionable: bool,
}

/// Render the panel to displayable rows, or `None` when hidden.
pub fn render_panel(panel: &Panel) -> Option<Vec<Item>> {
    match panel {
        Panel::Oculto => None,
        Panel::Sugerencias(comunas) => Some(
            comunas
                .iter()
                .map(|comuna| Item {
                    texto: (*comuna).to_string(),
                    seleccionable: true,
                })
                .collect(),
        ),
        Panel::SinResultados => Some(vec![Item {
            texto: SIN_RESULTADOS.to_string(),
            seleccionable: false,
        }]),
    }
}
