#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        if let Ok(service) = blitz::ServiceName::new(name) {
            let command = blitz::domain::services::ActivationPlan::for_service(&service).render();
            assert!(!command.contains('\''));
        }
    }
});
