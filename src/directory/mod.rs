//! Static región → comuna lookup directory.
//!
//! The table is embedded at compile time and never mutated. The
//! flattened comuna list is built once on first use and cached for the
//! life of the process; every accessor after that is allocation-free.

use std::sync::LazyLock;

mod regiones;

use regiones::REGIONES_COMUNAS;

static REGIONES: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| REGIONES_COMUNAS.iter().map(|(region, _)| *region).collect());

/// Every comuna across all regiones, sorted ascending by code point.
/// Duplicate names across regiones would be preserved; the current
/// table has none.
static COMUNAS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut comunas: Vec<&'static str> = REGIONES_COMUNAS
        .iter()
        .flat_map(|(_, comunas)| comunas.iter().copied())
        .collect();
    comunas.sort_unstable();
    comunas
});

/// All región display names, in display order.
pub fn all_regiones() -> &'static [&'static str] {
    &REGIONES
}

/// The comunas of a región, in display order, or `None` for an unknown
/// región name.
pub fn comunas_de_region(region: &str) -> Option<&'static [&'static str]> {
    REGIONES_COMUNAS
        .iter()
        .find(|(nombre, _)| *nombre == region)
        .map(|(_, comunas)| *comunas)
}

/// Every comuna in the country, sorted ascending by code point.
pub fn all_comunas() -> &'static [&'static str] {
    &COMUNAS
}

/// Check whether `region` is a known región display name.
pub fn is_known_region(region: &str) -> bool {
    comunas_de_region(region).is_some()
}

/// Check whether `comuna` is a known comuna display name.
pub fn is_known_comuna(comuna: &str) -> bool {
    COMUNAS.binary_search(&comuna).is_ok()
}

/// The región a comuna belongs to.
///
/// If a comuna name ever appeared in more than one región, the first
/// owner in display order wins.
pub fn region_de_comuna(comuna: &str) -> Option<&'static str> {
    REGIONES_COMUNAS
        .iter()
        .find(|(_, comunas)| comunas.contains(&comuna))
        .map(|(region, _)| *region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_count() {
        assert_eq!(all_regiones().len(), 16);
    }

    #[test]
    fn comuna_count() {
        assert_eq!(all_comunas().len(), 346);
    }

    #[test]
    fn flattened_list_is_sorted() {
        for window in all_comunas().windows(2) {
            assert!(
                window[0] < window[1],
                "comunas not sorted: {} >= {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn every_region_has_comunas() {
        for region in all_regiones() {
            assert!(
                !comunas_de_region(region).unwrap().is_empty(),
                "región {region} has no comunas"
            );
        }
    }

    #[test]
    fn known_regiones() {
        assert!(is_known_region("Región de Valparaíso"));
        assert!(is_known_region("Región Metropolitana de Santiago"));
        assert!(is_known_region(
            "Región del Libertador General Bernardo O'Higgins"
        ));
    }

    #[test]
    fn unknown_regiones() {
        assert!(!is_known_region(""));
        assert!(!is_known_region("Valparaíso"));
        assert!(!is_known_region("región de valparaíso"));
    }

    #[test]
    fn known_comunas() {
        assert!(is_known_comuna("Santiago"));
        assert!(is_known_comuna("Ñuñoa"));
        assert!(is_known_comuna("O'Higgins"));
        assert!(is_known_comuna("Viña del Mar"));
    }

    #[test]
    fn unknown_comunas() {
        assert!(!is_known_comuna(""));
        assert!(!is_known_comuna("santiago"));
        assert!(!is_known_comuna("Buenos Aires"));
    }

    #[test]
    fn region_lookup_for_comuna() {
        assert_eq!(
            region_de_comuna("Putre"),
            Some("Región de Arica y Parinacota")
        );
        assert_eq!(
            region_de_comuna("Ñuñoa"),
            Some("Región Metropolitana de Santiago")
        );
        assert_eq!(region_de_comuna("Narnia"), None);
    }

    #[test]
    fn comunas_keep_display_order() {
        let arica = comunas_de_region("Región de Arica y Parinacota").unwrap();
        assert_eq!(arica, ["Arica", "Camarones", "General Lagos", "Putre"]);
    }
}
