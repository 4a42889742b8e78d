//! Edge cases across the directory, autocomplete, and validation.

#![cfg(feature = "autocomplete")]

use tramite::autocomplete::{ComunaAutocomplete, Panel};
use tramite::core::rut;
use tramite::directory;

// --- rut boundaries ---

#[test]
fn rut_body_length_boundaries() {
    assert!(rut::is_valid_rut_format("1-9"));
    assert!(rut::is_valid_rut_format("1234567890-k"));
    assert!(!rut::is_valid_rut_format("12345678901-k"));
}

#[test]
fn rut_all_dots_body_passes_shape_check() {
    // the shape check constrains the charset, not the digit layout
    assert!(rut::is_valid_rut_format("...-9"));
}

#[test]
fn rut_unicode_dash_rejected() {
    assert!(!rut::is_valid_rut_format("12345678–9"));
}

// --- autocomplete input quirks ---

#[test]
fn input_with_inner_spaces_still_matches() {
    let mut ac = ComunaAutocomplete::new();
    ac.input_changed("puerto ");
    match ac.panel() {
        Panel::Sugerencias(items) => {
            assert_eq!(*items, ["Puerto Montt", "Puerto Octay", "Puerto Varas"]);
        }
        other => panic!("expected suggestions, got {other:?}"),
    }
}

#[test]
fn leading_space_prevents_a_match_but_shows_panel() {
    // " viña" is non-blank, yet no name contains the padded form
    let mut ac = ComunaAutocomplete::new();
    ac.input_changed(" viña");
    assert_eq!(*ac.panel(), Panel::SinResultados);
}

#[test]
fn repeated_region_selection_is_idempotent() {
    let mut ac = ComunaAutocomplete::new();
    ac.select_region("Región de Ñuble");
    let primera = ac.candidatas().to_vec();
    ac.select_region("Región de Ñuble");
    assert_eq!(ac.candidatas(), primera);
}

#[test]
fn switching_regions_replaces_candidates() {
    let mut ac = ComunaAutocomplete::new();
    ac.select_region("Región de Tarapacá");
    assert_eq!(ac.candidatas().len(), 7);
    ac.select_region("Región de Atacama");
    assert_eq!(ac.candidatas().len(), 9);
    assert!(!ac.candidatas().contains(&"Iquique"));
}

#[test]
fn whole_name_is_its_own_substring() {
    let mut ac = ComunaAutocomplete::new();
    ac.input_changed("Puqueldón");
    match ac.panel() {
        Panel::Sugerencias(items) => assert_eq!(*items, ["Puqueldón"]),
        other => panic!("expected suggestions, got {other:?}"),
    }
}

// --- directory consistency with the autocomplete ---

#[test]
fn every_region_selection_yields_choosable_suggestions() {
    let mut ac = ComunaAutocomplete::new();
    for region in directory::all_regiones() {
        ac.select_region(region);
        let primera = ac.candidatas()[0];
        ac.input_changed(primera);
        let elegida = ac.choose_suggestion(0).unwrap();
        assert_eq!(elegida, primera, "region {region}");
    }
}
