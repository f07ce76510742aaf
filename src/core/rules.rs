use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// One independent quality predicate. Rules are pure and total: every input,
/// including the empty string, gets a boolean verdict and never an error.
pub trait QualityRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn passes(&self, review: &str) -> bool;
}

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(r"[a-z0-9']+").expect("token pattern compiles"))
}

fn tokenize(review: &str) -> Vec<String> {
    let lowered = review.to_lowercase();
    token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Trimmed review text must reach a minimum character count.
pub struct MinimumLengthRule {
    min_chars: usize,
}

impl MinimumLengthRule {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }
}

impl QualityRule for MinimumLengthRule {
    fn name(&self) -> &'static str {
        "minimum-length"
    }

    fn passes(&self, review: &str) -> bool {
        review.trim().chars().count() >= self.min_chars
    }
}

/// Case-insensitive whole-word denylist match. Substrings inside longer words
/// do not count ("class" must not trip on "ass").
pub struct ProfanityRule {
    pattern: Option<Regex>,
}

impl ProfanityRule {
    pub fn new(denylist: &[String]) -> Self {
        let words: Vec<String> = denylist
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(regex::escape)
            .collect();

        let pattern = if words.is_empty() {
            None
        } else {
            let source = format!(r"(?i)\b(?:{})\b", words.join("|"));
            Some(Regex::new(&source).expect("escaped denylist pattern compiles"))
        };

        Self { pattern }
    }
}

impl QualityRule for ProfanityRule {
    fn name(&self) -> &'static str {
        "profanity"
    }

    fn passes(&self, review: &str) -> bool {
        match &self.pattern {
            Some(pattern) => !pattern.is_match(review),
            None => true,
        }
    }
}

/// Rejects known filler phrases ("lorem ipsum", ...), matched case-insensitively
/// anywhere in the text.
pub struct PlaceholderRule {
    phrases: Vec<String>,
}

impl PlaceholderRule {
    pub fn new(phrases: &[String]) -> Self {
        let phrases = phrases
            .iter()
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases }
    }
}

impl QualityRule for PlaceholderRule {
    fn name(&self) -> &'static str {
        "placeholder-text"
    }

    fn passes(&self, review: &str) -> bool {
        let lowered = review.to_lowercase();
        !self.phrases.iter().any(|phrase| lowered.contains(phrase))
    }
}

/// Rejects text dominated by one repeated character or one repeated token,
/// e.g. "aaaaaaaaaa" or "great great great great".
pub struct RepetitionRule {
    max_char_fraction: f64,
    max_token_fraction: f64,
}

impl RepetitionRule {
    pub fn new(max_char_fraction: f64, max_token_fraction: f64) -> Self {
        Self {
            max_char_fraction,
            max_token_fraction,
        }
    }
}

impl QualityRule for RepetitionRule {
    fn name(&self) -> &'static str {
        "repetition"
    }

    fn passes(&self, review: &str) -> bool {
        let chars: Vec<char> = review
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(|c| c.to_lowercase())
            .collect();

        // Character dominance only matters past a handful of characters;
        // tiny inputs are the length rule's problem.
        if chars.len() >= 8 {
            let mut counts: HashMap<char, usize> = HashMap::new();
            for c in &chars {
                *counts.entry(*c).or_insert(0) += 1;
            }
            let max = counts.values().copied().max().unwrap_or(0);
            if max as f64 / chars.len() as f64 > self.max_char_fraction {
                return false;
            }
        }

        let tokens = tokenize(review);
        if tokens.len() >= 4 {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for token in &tokens {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
            let max = counts.values().copied().max().unwrap_or(0);
            if max as f64 / tokens.len() as f64 > self.max_token_fraction {
                return false;
            }
        }

        true
    }
}

/// Rejects text whose alphabetic tokens mostly do not resemble words.
/// Heuristic: a word-like token contains a vowel and no run of five or more
/// consonants.
pub struct GibberishRule {
    min_wordlike_fraction: f64,
}

const VOWELS: &str = "aeiouy";

impl GibberishRule {
    pub fn new(min_wordlike_fraction: f64) -> Self {
        Self {
            min_wordlike_fraction,
        }
    }

    fn looks_like_word(token: &str) -> bool {
        if !token.chars().any(|c| VOWELS.contains(c)) {
            return false;
        }

        let mut consonant_run = 0;
        for c in token.chars() {
            if c.is_ascii_alphabetic() && !VOWELS.contains(c) {
                consonant_run += 1;
                if consonant_run >= 5 {
                    return false;
                }
            } else {
                consonant_run = 0;
            }
        }
        true
    }
}

impl QualityRule for GibberishRule {
    fn name(&self) -> &'static str {
        "gibberish"
    }

    fn passes(&self, review: &str) -> bool {
        let tokens = tokenize(review);
        let words: Vec<&String> = tokens
            .iter()
            .filter(|t| t.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();

        // Nothing alphabetic to judge; leave the verdict to the other rules.
        if words.is_empty() {
            return true;
        }

        let wordlike = words.iter().filter(|t| Self::looks_like_word(t)).count();
        wordlike as f64 / words.len() as f64 >= self.min_wordlike_fraction
    }
}
