//! Drive the comuna autocomplete the way a page would.
//!
//! Run with: `cargo run --example autocompletado --features autocomplete`

use tramite::autocomplete::ComunaAutocomplete;
use tramite::autocomplete::render::render_panel;

fn mostrar(ac: &ComunaAutocomplete, evento: &str) {
    println!("== {evento}");
    println!("   input: {:?}", ac.entrada());
    match render_panel(ac.panel()) {
        None => println!("   panel hidden"),
        Some(items) => {
            for item in items {
                let marca = if item.seleccionable { "*" } else { " " };
                println!("   {marca} {}", item.texto);
            }
        }
    }
}

fn main() {
    let mut ac = ComunaAutocomplete::new();

    ac.input_changed("an");
    mostrar(&ac, "typed \"an\" with no región selected");

    ac.select_region("Región de Valparaíso");
    mostrar(&ac, "selected Región de Valparaíso");

    ac.input_changed("qui");
    mostrar(&ac, "typed \"qui\"");

    if let Some(elegida) = ac.choose_suggestion(0) {
        mostrar(&ac, &format!("clicked first suggestion ({elegida})"));
    }

    ac.input_changed("xyz");
    mostrar(&ac, "typed \"xyz\"");

    ac.click_outside();
    mostrar(&ac, "clicked outside");
}
