//! Property tests for input validation.

use proptest::prelude::*;

use blitz::domain::services::ActivationPlan;
use blitz::domain::value_objects::DeployUser;
use blitz::{Host, ServiceName, ValidationReason};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every allow-listed name of 1-64 characters is accepted.
    #[test]
    fn property_service_name_accepts_allow_list(name in "[A-Za-z0-9._-]{1,64}") {
        prop_assert!(ServiceName::new(name.as_str()).is_ok());
    }

    /// PROPERTY: Names longer than 64 characters are too long.
    #[test]
    fn property_service_name_rejects_long(name in "[A-Za-z0-9._-]{65,100}") {
        prop_assert_eq!(
            ServiceName::new(name.as_str()).unwrap_err(),
            ValidationReason::TooLong { max: 64 }
        );
    }

    /// PROPERTY: Any character outside the allow-list is rejected.
    #[test]
    fn property_service_name_rejects_foreign_chars(
        prefix in "[a-z]{0,10}",
        bad in "[^A-Za-z0-9._-]",
        suffix in "[a-z]{0,10}",
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        prop_assert!(ServiceName::new(name.as_str()).is_err());
    }

    /// PROPERTY: Users never contain `@`, `.` or whitespace.
    #[test]
    fn property_user_accepts_only_allow_list(user in "(?s).{0,32}") {
        match DeployUser::new(user.as_str()) {
            Ok(valid) => prop_assert!(valid
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')),
            Err(_) => {}
        }
    }

    /// PROPERTY: Host validation never panics.
    #[test]
    fn property_host_never_panics(host in "(?s).{0,300}") {
        let _ = Host::new(&host);
    }

    /// PROPERTY: Accepted hosts contain no shell metacharacters.
    #[test]
    fn property_accepted_host_is_shell_safe(host in "[ -~]{0,64}") {
        if let Ok(valid) = Host::new(&host) {
            let rendered = valid.to_string();
            prop_assert!(rendered
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':')));
        }
    }

    /// PROPERTY: Valid service names render the canonical activation command.
    #[test]
    fn property_activation_command_matches_template(name in "[A-Za-z0-9_][A-Za-z0-9._-]{0,63}") {
        let service = ServiceName::new(name.as_str()).unwrap();
        let expected = format!(
            "sudo mv ~/{name}.service /etc/systemd/system/ && sudo systemctl enable {name} && sudo systemctl restart {name}"
        );
        prop_assert_eq!(ActivationPlan::for_service(&service).render(), expected);
    }
}
