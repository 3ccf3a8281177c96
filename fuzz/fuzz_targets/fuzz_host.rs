#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(host) = std::str::from_utf8(data) {
        if let Ok(valid) = blitz::Host::new(host) {
            // Accepted hosts reach the ssh command line unquoted
            assert!(valid
                .to_string()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':')));
        }
    }
});
