#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Overlay parsing must never panic
        let _ = blitz::config::parse_overlay(content);
    }
});
