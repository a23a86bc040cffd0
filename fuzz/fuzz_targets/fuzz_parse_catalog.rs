#![no_main]
use libfuzzer_sys::fuzz_target;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz the catalog JSON parser.
///
/// Tries raw input first, then wraps it as a single device entry so that
/// deep field deserialization is reached instead of failing at the
/// top-level document shape.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = devrank::catalog::parse_catalog_str(s);

        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(r#"{{"devices":[{{"id":"f","name":"F",{s}}}]}}"#);
            let _ = devrank::catalog::parse_catalog_str(&wrapped);
        }
    }
});
