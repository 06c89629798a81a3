#![no_main]

use libfuzzer_sys::fuzz_target;

use blogger::infrastructure::extensions::ExtensionManifest;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(manifest) = ExtensionManifest::parse(content, std::path::Path::new("extensions.toml")) {
            let _ = manifest.requirements(std::path::Path::new("/blog"));
        }
    }
});
