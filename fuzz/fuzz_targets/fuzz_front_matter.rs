#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let post = blogger::domain::services::parse_post(content);
        assert_eq!(post.source_text, content);
    }
});
