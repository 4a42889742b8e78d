//! Validate a registration form and print the failures.
//!
//! Run with: `cargo run --example validacion`

use chrono::{TimeZone, Utc};
use tramite::core::*;

fn main() {
    let fecha = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    // a submission with several problems
    let solicitud = SolicitudBuilder::new("12345678", fecha)
        .nombre("A")
        .apellido_paterno("Pérez")
        .apellido_materno("Soto")
        .direccion("casa")
        .telefono("12345")
        .comuna("Viña del Mar")
        .build_unchecked();

    let errores = validate_solicitud(&solicitud);
    println!("{} field(s) failed validation:", errores.len());
    for error in &errores {
        println!("  {error}");
    }

    // fixed and rebuilt through the validating front door
    let solicitud = SolicitudBuilder::new("12.345.678-5", fecha)
        .nombre("Ana")
        .apellido_paterno("Pérez")
        .apellido_materno("Soto")
        .direccion("Av. Libertad 123")
        .telefono("987654321")
        .comuna("Viña del Mar")
        .build()
        .expect("valid form");

    println!("\naccepted: {solicitud}");
    println!("estado: {}", solicitud.estado);
}
