#![no_main]

use libfuzzer_sys::fuzz_target;

use blogger::domain::value_objects::{draft_file_name, slugify};

fuzz_target!(|data: &[u8]| {
    if let Ok(title) = std::str::from_utf8(data) {
        assert!(!slugify(title).contains('/'));
        assert!(!draft_file_name("2024-01-01", title, 0).contains('/'));
    }
});
