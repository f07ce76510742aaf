use crate::config::QualityPolicy;
use crate::core::rules::{
    GibberishRule, MinimumLengthRule, PlaceholderRule, ProfanityRule, QualityRule, RepetitionRule,
};

/// Gate for user-submitted review text: the verdict is the logical AND of an
/// ordered set of independent rules. Pure and stateless; the same input always
/// yields the same verdict.
pub struct ReviewVerifier {
    rules: Vec<Box<dyn QualityRule>>,
}

impl ReviewVerifier {
    pub fn new() -> Self {
        Self::from_policy(&QualityPolicy::default())
    }

    pub fn from_policy(policy: &QualityPolicy) -> Self {
        let rules: Vec<Box<dyn QualityRule>> = vec![
            Box::new(MinimumLengthRule::new(policy.min_length)),
            Box::new(ProfanityRule::new(&policy.denylist)),
            Box::new(PlaceholderRule::new(&policy.placeholder_phrases)),
            Box::new(RepetitionRule::new(
                policy.max_repeat_fraction,
                policy.max_token_fraction,
            )),
            Box::new(GibberishRule::new(policy.min_wordlike_fraction)),
        ];
        Self { rules }
    }

    /// Custom rule sets, mainly for tests and callers with their own policy.
    pub fn with_rules(rules: Vec<Box<dyn QualityRule>>) -> Self {
        Self { rules }
    }

    /// True only if every configured rule passes. Short-circuits on the first
    /// failing rule; rule order does not affect the verdict.
    pub fn meets_quality_standards(&self, review: &str) -> bool {
        for rule in &self.rules {
            if !rule.passes(review) {
                tracing::debug!("Review rejected by rule: {}", rule.name());
                return false;
            }
        }
        true
    }
}

impl Default for ReviewVerifier {
    fn default() -> Self {
        Self::new()
    }
}
