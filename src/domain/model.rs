use serde::{Deserialize, Serialize};

/// A catalog entry. `id` is assigned by the repository on save and is absent
/// before the record has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub isbn: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Inbound queue payload: a request to make sure metadata for one ISBN exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynchronizationRequest {
    pub isbn: String,
}

impl SynchronizationRequest {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self { isbn: isbn.into() }
    }
}

/// A normalized, format-checked ISBN (10 or 13 digits, hyphens stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Isbn(String);

impl Isbn {
    /// Normalizes hyphens and whitespace away and accepts exactly 10 or 13
    /// ASCII digits. Malformed input yields `None`; rejection is a policy
    /// decision, not an error.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        if (normalized.len() == 10 || normalized.len() == 13)
            && normalized.chars().all(|c| c.is_ascii_digit())
        {
            Some(Self(normalized))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_10_and_13_digit_isbns() {
        assert_eq!(
            Isbn::parse("9780596004651").unwrap().as_str(),
            "9780596004651"
        );
        assert_eq!(Isbn::parse("0596004656").unwrap().as_str(), "0596004656");
    }

    #[test]
    fn test_parse_normalizes_hyphens_and_spaces() {
        assert_eq!(
            Isbn::parse("978-0-596-00465-1").unwrap().as_str(),
            "9780596004651"
        );
        assert_eq!(
            Isbn::parse(" 978 0596004651 ").unwrap().as_str(),
            "9780596004651"
        );
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(Isbn::parse("42").is_none());
        assert!(Isbn::parse("").is_none());
        assert!(Isbn::parse("97805960046510").is_none());
        assert!(Isbn::parse("97805960046X1").is_none());
        assert!(Isbn::parse("not-an-isbn").is_none());
    }
}
