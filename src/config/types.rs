// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://www.thecocktaildb.com/api/json/v1/1/search.php";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_PLACEHOLDER: &str = "Search for a drink...";
pub const DEFAULT_NO_OPTIONS_LABEL: &str = "No drinks";

/// Lookup service section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-request timeout; 0 disables it
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            endpoint: default_endpoint(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Query debounce section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Presentation section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_no_options_label")]
    pub no_options_label: String,
    /// `false` hides the loading indicator unconditionally
    #[serde(default = "default_show_loading")]
    pub show_loading: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            placeholder: default_placeholder(),
            no_options_label: default_no_options_label(),
            show_loading: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_no_options_label() -> String {
    DEFAULT_NO_OPTIONS_LABEL.to_string()
}

fn default_show_loading() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.lookup.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.search.debounce_ms, 500);
        assert!(config.ui.show_loading);
    }

    #[test]
    fn test_partial_ui_section() {
        let config: Config = toml::from_str("[ui]\nshow_loading = false\n").unwrap();
        assert!(!config.ui.show_loading);
        assert_eq!(config.ui.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(config.ui.no_options_label, DEFAULT_NO_OPTIONS_LABEL);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[search]\ndebounce_ms = \"fast\"\n");
        assert!(config.is_err());
    }

    // Any debounce value written in the file is taken verbatim
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_debounce_ms_parsing(ms in 0u64..100_000) {
            let toml_content = format!("[search]\ndebounce_ms = {}\n", ms);
            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok());
            prop_assert_eq!(config.unwrap().search.debounce_ms, ms);
        }
    }

    // Missing sections and fields always fall back to defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_lookup_section in prop::bool::ANY,
            include_timeout_field in prop::bool::ANY
        ) {
            let toml_content = if !include_lookup_section {
                String::new()
            } else if !include_timeout_field {
                "[lookup]\n".to_string()
            } else {
                "[lookup]\ntimeout_ms = 250\n".to_string()
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            let config = config.unwrap();

            prop_assert_eq!(config.lookup.endpoint.as_str(), DEFAULT_ENDPOINT);
            if include_lookup_section && include_timeout_field {
                prop_assert_eq!(config.lookup.timeout_ms, 250);
            } else {
                prop_assert_eq!(config.lookup.timeout_ms, DEFAULT_TIMEOUT_MS);
            }
        }
    }
}
