#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing site.yaml may fail but must never panic
        let _ = blogger::config::parse_site_config(content, std::path::Path::new("site.yaml"));
    }
});
