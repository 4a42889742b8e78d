#![no_main]

use libfuzzer_sys::fuzz_target;
use tramite::core::rut;

fuzz_target!(|data: &str| {
    // neither check may panic on arbitrary input, and anything the
    // strict shape accepts must survive normalization's charset rule
    let estricto = rut::is_valid_rut_format(data);
    let limpio = rut::normalize_rut(data);

    if estricto {
        if let Err(e) = &limpio {
            assert!(
                e.reason.contains("characters"),
                "strictly valid RUT rejected for charset: {data:?}"
            );
        }
    }
});
