#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the free-text numeric coercion.
///
/// Coercion must never panic and never produce a negative or NaN value,
/// whatever bytes the source catalog carries.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(value) = devrank::scoring::coerce_number(s) {
            assert!(value >= 0.0);
            assert!(!value.is_nan());
        }
    }
});
