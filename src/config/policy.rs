use crate::utils::error::Result;
use crate::utils::validation::{
    validate_fraction, validate_non_empty_strings, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Knobs for the review quality rules. Loadable from TOML; every field has a
/// built-in default so a policy file only needs to override what it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityPolicy {
    /// Minimum trimmed character count for a review.
    pub min_length: usize,
    /// Disallowed words, matched case-insensitively as whole words.
    pub denylist: Vec<String>,
    /// Filler phrases rejected as substrings, case-insensitively.
    pub placeholder_phrases: Vec<String>,
    /// A single character may make up at most this fraction of the text.
    pub max_repeat_fraction: f64,
    /// A single token may make up at most this fraction of the token stream.
    pub max_token_fraction: f64,
    /// At least this fraction of alphabetic tokens must look like real words.
    pub min_wordlike_fraction: f64,
}

impl Default for QualityPolicy {
    fn default() -> Self {
        Self {
            min_length: 15,
            denylist: [
                "shit", "fuck", "ass", "asshole", "bitch", "bastard", "damn", "crap",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            placeholder_phrases: ["lorem ipsum", "dolor sit amet", "insert review here"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_repeat_fraction: 0.4,
            max_token_fraction: 0.5,
            min_wordlike_fraction: 0.5,
        }
    }
}

impl QualityPolicy {
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let policy: QualityPolicy = toml::from_str(&raw)?;
        policy.validate()?;
        Ok(policy)
    }
}

impl Validate for QualityPolicy {
    fn validate(&self) -> Result<()> {
        validate_positive_number("min_length", self.min_length, 1)?;
        validate_non_empty_strings("denylist", &self.denylist)?;
        validate_non_empty_strings("placeholder_phrases", &self.placeholder_phrases)?;
        validate_fraction("max_repeat_fraction", self.max_repeat_fraction)?;
        validate_fraction("max_token_fraction", self.max_token_fraction)?;
        validate_fraction("min_wordlike_fraction", self.min_wordlike_fraction)?;
        Ok(())
    }
}
