//! Property tests for `.env` overlay parsing and layering.

use std::collections::HashMap;

use proptest::prelude::*;

use blitz::config::{parse_overlay, resolve};
use blitz::{ConfigField, ConfigOverrides};

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Z_]{0,12}").unwrap()
}

fn value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9./_=-]{0,24}").unwrap()
}

fn field() -> impl Strategy<Value = ConfigField> {
    proptest::sample::select(ConfigField::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Overlay parsing never panics on arbitrary input.
    #[test]
    fn property_parse_overlay_never_panics(content in "(?s).{0,512}") {
        let _ = parse_overlay(&content);
    }

    /// PROPERTY: Parsed keys and values are always trimmed.
    #[test]
    fn property_parse_overlay_trims(content in "(?s).{0,256}") {
        for (k, v) in parse_overlay(&content) {
            prop_assert_eq!(k.trim(), k.as_str());
            prop_assert_eq!(v.trim(), v.as_str());
        }
    }

    /// PROPERTY: Well-formed `key=value` lines come back unchanged, last one wins.
    #[test]
    fn property_parse_overlay_recovers_assignments(
        pairs in proptest::collection::vec((key(), value()), 0..=10),
    ) {
        let content: String = pairs
            .iter()
            .map(|(k, v)| format!("{k} = {v}\n"))
            .collect();

        let mut expected = HashMap::new();
        for (k, v) in &pairs {
            expected.insert(k.clone(), v.clone());
        }

        prop_assert_eq!(parse_overlay(&content), expected);
    }

    /// PROPERTY: A non-empty layer always beats every layer below it.
    #[test]
    fn property_layer_precedence(
        field in field(),
        flag in proptest::option::of(value()),
        file in proptest::option::of(value()),
        env in proptest::option::of(value()),
    ) {
        let mut overrides = ConfigOverrides::default();
        let slot = match field {
            ConfigField::Env => &mut overrides.env,
            ConfigField::ServiceName => &mut overrides.service_name,
            ConfigField::BinaryDir => &mut overrides.binary_dir,
            ConfigField::UnitDir => &mut overrides.unit_dir,
            ConfigField::User => &mut overrides.user,
            ConfigField::Host => &mut overrides.host,
        };
        *slot = flag.clone();

        let mut overlay = HashMap::new();
        if let Some(file) = &file {
            overlay.insert(field.env_key().to_string(), file.clone());
        }
        let env_value = env.clone();
        let key = field.env_key();
        let raw = resolve(&overrides, &overlay, move |k| {
            if k == key { env_value.clone() } else { None }
        });

        let default = if field == ConfigField::Env { "production" } else { "" };
        let expected = flag
            .or(file.filter(|v| !v.is_empty()))
            .or(env.filter(|v| !v.is_empty()))
            .unwrap_or_else(|| default.to_string());

        prop_assert_eq!(raw.get(field), expected.as_str());
    }
}
