use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tramite::autocomplete::ComunaAutocomplete;
use tramite::directory;

fn bench_country_wide_filter(c: &mut Criterion) {
    c.bench_function("filter_346_comunas_broad_term", |b| {
        let mut ac = ComunaAutocomplete::new();
        b.iter(|| {
            ac.input_changed(black_box("an"));
            black_box(ac.panel());
        });
    });

    c.bench_function("filter_346_comunas_unique_term", |b| {
        let mut ac = ComunaAutocomplete::new();
        b.iter(|| {
            ac.input_changed(black_box("valpar"));
            black_box(ac.panel());
        });
    });
}

fn bench_region_filter(c: &mut Criterion) {
    c.bench_function("filter_region_metropolitana", |b| {
        let mut ac = ComunaAutocomplete::new();
        ac.select_region("Región Metropolitana de Santiago");
        b.iter(|| {
            ac.input_changed(black_box("san"));
            black_box(ac.panel());
        });
    });
}

fn bench_keystroke_sequence(c: &mut Criterion) {
    // simulates a user narrowing letter by letter
    c.bench_function("keystrokes_s_sa_san_sant", |b| {
        let mut ac = ComunaAutocomplete::new();
        b.iter(|| {
            for prefijo in ["s", "sa", "san", "sant"] {
                ac.input_changed(black_box(prefijo));
            }
            black_box(ac.panel());
        });
    });
}

fn bench_directory(c: &mut Criterion) {
    c.bench_function("all_comunas_cached_access", |b| {
        b.iter(|| black_box(directory::all_comunas().len()));
    });
}

criterion_group!(
    benches,
    bench_country_wide_filter,
    bench_region_filter,
    bench_keystroke_sequence,
    bench_directory
);
criterion_main!(benches);
