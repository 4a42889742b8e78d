//! Walk the región/comuna directory.
//!
//! Run with: `cargo run --example directorio --features directory`

use tramite::directory;

fn main() {
    for region in directory::all_regiones() {
        let comunas = directory::comunas_de_region(region).unwrap_or(&[]);
        println!("{region} ({} comunas)", comunas.len());
        for comuna in comunas {
            println!("    {comuna}");
        }
    }

    println!(
        "\n{} regiones, {} comunas in total",
        directory::all_regiones().len(),
        directory::all_comunas().len()
    );
    println!(
        "Ñuñoa belongs to: {}",
        directory::region_de_comuna("Ñuñoa").unwrap()
    );
}
