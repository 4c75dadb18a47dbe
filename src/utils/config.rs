//! Navigation configuration

use std::env;

/// Environment variable enabling secure mode
pub const SECURE_MODE_ENV: &str = "WEBNAV_SECURE_MODE";
/// Environment variable controlling scheme inference for bare hosts
pub const INFER_SCHEME_ENV: &str = "WEBNAV_INFER_SCHEME";

/// Settings the request manager starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationConfig {
    /// Only accept HTTPS addresses
    pub secure_mode: bool,
    /// Treat `example.com` as `https://example.com`
    pub infer_scheme: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            secure_mode: false,
            infer_scheme: true,
        }
    }
}

impl NavigationConfig {
    /// Defaults overridden by `WEBNAV_SECURE_MODE` and `WEBNAV_INFER_SCHEME`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = lookup(SECURE_MODE_ENV).as_deref().and_then(parse_flag) {
            config.secure_mode = value;
        }
        if let Some(value) = lookup(INFER_SCHEME_ENV).as_deref().and_then(parse_flag) {
            config.infer_scheme = value;
        }
        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            log::warn!("ignoring unrecognised flag value `{}`", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = NavigationConfig::default();
        assert!(!config.secure_mode);
        assert!(config.infer_scheme);
    }

    #[test]
    fn test_env_overrides() {
        let config =
            NavigationConfig::from_lookup(lookup(&[(SECURE_MODE_ENV, "on"), (INFER_SCHEME_ENV, "0")]));
        assert!(config.secure_mode);
        assert!(!config.infer_scheme);
    }

    #[test]
    fn test_unrecognised_values_keep_defaults() {
        let config = NavigationConfig::from_lookup(lookup(&[(SECURE_MODE_ENV, "maybe")]));
        assert_eq!(config, NavigationConfig::default());
    }
}
