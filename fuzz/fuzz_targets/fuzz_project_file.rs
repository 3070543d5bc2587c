#![no_main]

use std::path::Path;

use forkwise::config::{parse_with_warnings, ConfigInputs};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and assembly may reject the file but must never panic
        if let Ok((file, _warnings)) = parse_with_warnings(content, Path::new("forkwise.toml")) {
            let _ = forkwise::assemble(&file, ConfigInputs::unset(), Path::new("/fuzz"));
        }
    }
});
