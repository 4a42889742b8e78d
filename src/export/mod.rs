//! Directory export for embedding as a static page asset.
//!
//! The hosting page loads the región → comuna mapping before the
//! autocomplete initializes; these helpers produce that asset as JSON.
//! Regiones serialize in display order, comunas in their display order
//! within each región.

use serde_json::{Map, Value, json};

use crate::directory;

/// The directory as a JSON object: región name → array of comunas.
pub fn directory_value() -> Value {
    let mut mapa = Map::new();
    for region in directory::all_regiones() {
        let comunas = directory::comunas_de_region(region)
            .unwrap_or(&[])
            .iter()
            .map(|comuna| json!(comuna))
            .collect();
        mapa.insert((*region).to_string(), Value::Array(comunas));
    }
    Value::Object(mapa)
}

/// Compact JSON for embedding.
pub fn directory_json() -> String {
    directory_value().to_string()
}

/// Pretty-printed JSON for inspection and fixtures.
pub fn directory_json_pretty() -> String {
    format!("{:#}", directory_value())
}
