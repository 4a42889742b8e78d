use crate::directory;

/// Maximum number of suggestions shown at once.
pub const MAX_SUGERENCIAS: usize = 10;

/// Current contents of the suggestion panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Panel is not shown.
    Oculto,
    /// Panel shows up to [`MAX_SUGERENCIAS`] selectable comunas,
    /// in candidate order.
    Sugerencias(Vec<&'static str>),
    /// Panel shows a single non-selectable "no results" item.
    SinResultados,
}

impl Panel {
    /// Whether the panel is currently shown.
    pub fn visible(&self) -> bool {
        !matches!(self, Self::Oculto)
    }
}

/// Autocomplete state for the comuna field of a registration form.
///
/// Candidates start as the full country-wide comuna list and narrow to
/// a single región's comunas when one is selected. Typing filters the
/// candidates by case-insensitive substring match; matching is
/// accent-sensitive, so "Ñuñoa" is only found by typing its characters
/// literally. The selection never constrains the final input: the
/// field keeps whatever the user typed, validated elsewhere.
#[derive(Debug, Clone)]
pub struct ComunaAutocomplete {
    region_seleccionada: String,
    candidatas: Vec<&'static str>,
    entrada: String,
    panel: Panel,
}

impl ComunaAutocomplete {
    /// Create a controller with no región selected: every comuna in
    /// the country is a candidate and the panel is hidden.
    pub fn new() -> Self {
        Self {
            region_seleccionada: String::new(),
            candidatas: directory::all_comunas().to_vec(),
            entrada: String::new(),
            panel: Panel::Oculto,
        }
    }

    /// The región selector changed.
    ///
    /// An empty name clears the selection and restores the full
    /// candidate list; a known región narrows candidates to its
    /// comunas in display order; an unknown name leaves no candidates.
    /// The text input is cleared and the panel hidden either way.
    pub fn select_region(&mut self, region: &str) {
        self.region_seleccionada = region.to_string();
        self.candidatas = if region.is_empty() {
            directory::all_comunas().to_vec()
        } else {
            directory::comunas_de_region(region)
                .map(<[&str]>::to_vec)
                .unwrap_or_default()
        };
        self.entrada.clear();
        self.panel = Panel::Oculto;
    }

    /// The comuna text input changed.
    ///
    /// Blank input (empty after trimming) hides and empties the panel.
    /// Otherwise the panel becomes visible with either the first
    /// [`MAX_SUGERENCIAS`] matches in candidate order, or the "no
    /// results" placeholder when nothing matches.
    pub fn input_changed(&mut self, texto: &str) {
        self.entrada = texto.to_string();

        if texto.trim().is_empty() {
            self.panel = Panel::Oculto;
            return;
        }

        let termino = texto.to_lowercase();
        let coincidencias: Vec<&'static str> = self
            .candidatas
            .iter()
            .filter(|comuna| comuna.to_lowercase().contains(&termino))
            .take(MAX_SUGERENCIAS)
            .copied()
            .collect();

        self.panel = if coincidencias.is_empty() {
            Panel::SinResultados
        } else {
            Panel::Sugerencias(coincidencias)
        };
    }

    /// A suggestion was activated.
    ///
    /// Copies the suggestion's exact text into the input and hides the
    /// panel. Returns the chosen comuna, or `None` when the panel is
    /// not showing suggestions or the index is out of range (the "no
    /// results" item is not selectable).
    pub fn choose_suggestion(&mut self, indice: usize) -> Option<&'static str> {
        let Panel::Sugerencias(items) = &self.panel else {
            return None;
        };
        let elegida = *items.get(indice)?;
        self.entrada = elegida.to_string();
        self.panel = Panel::Oculto;
        Some(elegida)
    }

    /// The pointer went down outside both the input and the panel.
    ///
    /// Only hides the panel; the selected región and candidate list
    /// are untouched.
    pub fn click_outside(&mut self) {
        self.panel = Panel::Oculto;
    }

    /// Currently selected región name, empty when none.
    pub fn region_seleccionada(&self) -> &str {
        &self.region_seleccionada
    }

    /// The active candidate list the filter runs over.
    pub fn candidatas(&self) -> &[&'static str] {
        &self.candidatas
    }

    /// Current contents of the text input.
    pub fn entrada(&self) -> &str {
        &self.entrada
    }

    /// Current panel state.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Whether selectable suggestions are on screen.
    pub fn suggestions_visible(&self) -> bool {
        matches!(self.panel, Panel::Sugerencias(_))
    }
}

impl Default for ComunaAutocomplete {
    fn default() -> Self {
        Self::new()
    }
}
