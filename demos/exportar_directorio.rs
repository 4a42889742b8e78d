//! Emit the directory as the JSON asset a hosting page embeds.
//!
//! Run with: `cargo run --example exportar_directorio --features export`

use tramite::export;

fn main() {
    println!("{}", export::directory_json_pretty());
}
