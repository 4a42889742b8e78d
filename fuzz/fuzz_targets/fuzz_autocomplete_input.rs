#![no_main]

use libfuzzer_sys::fuzz_target;
use tramite::autocomplete::{ComunaAutocomplete, MAX_SUGERENCIAS, Panel};

fuzz_target!(|data: &str| {
    let mut ac = ComunaAutocomplete::new();

    for linea in data.lines() {
        match linea.strip_prefix('#') {
            Some(region) => ac.select_region(region),
            None => ac.input_changed(linea),
        }

        match ac.panel() {
            Panel::Sugerencias(items) => {
                assert!(!items.is_empty());
                assert!(items.len() <= MAX_SUGERENCIAS);
            }
            Panel::Oculto | Panel::SinResultados => {}
        }
    }

    ac.choose_suggestion(0);
    ac.click_outside();
});
