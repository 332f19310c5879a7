// Converter configuration: which helpers to substitute, and with what.
//
// Loaded from JSON so a conversion (e.g. polite → plain style) can be
// changed without recompiling. The default is embedded at compile time
// from `data/default_config.json`. Paradigm and helper tables are not
// configurable; they live in `katsuyo_text`.
//
// Format:
//   {
//     "conversions": { "polite": null, "polite_copula": "copula" },
//     "keep_on_error": true
//   }
//
// A `null` replacement drops the helper. Keys and values use the helper
// labels (`Helper::label`).

use std::collections::BTreeMap;

use katsuyo_text::Helper;
use serde::{Deserialize, Serialize};

fn default_keep_on_error() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Helper found in the sentence → replacement (`None` removes it).
    pub conversions: BTreeMap<Helper, Option<Helper>>,
    /// When a sentence fails to convert, emit it unchanged instead of
    /// reporting the error.
    #[serde(default = "default_keep_on_error")]
    pub keep_on_error: bool,
}

impl ConverterConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Config with the given conversions and default flags.
    pub fn with_conversions(conversions: impl IntoIterator<Item = (Helper, Option<Helper>)>) -> Self {
        ConverterConfig {
            conversions: conversions.into_iter().collect(),
            keep_on_error: default_keep_on_error(),
        }
    }
}

/// Load the default config embedded at compile time.
///
/// Uses `include_str!` to embed `data/default_config.json`. Panics if the
/// embedded JSON is malformed (should never happen in a released build).
pub fn default_config() -> ConverterConfig {
    let json = include_str!("../data/default_config.json");
    ConverterConfig::from_json(json).expect("embedded default_config.json is malformed")
}
