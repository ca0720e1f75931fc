use super::DetectionResult;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Largest per-match weight magnitude a catalog may configure.
pub const MAX_WEIGHT: i32 = 100;

/// A labeled list of lowercase terms scored by substring presence.
///
/// Each term present in the search text contributes `weight` once, no matter
/// how often it occurs. Negative weights pull the score toward legitimate.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PatternList {
    label: String,
    weight: i32,
    terms: Vec<String>,
}

impl PatternList {
    pub fn new(label: &str, weight: i32, terms: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            weight,
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn urgency() -> Self {
        Self::new(
            "Urgent language",
            15,
            &[
                "urgent",
                "immediate",
                "expire",
                "suspend",
                "terminate",
                "act now",
                "limited time",
                "deadline",
            ],
        )
    }

    pub fn suspicious_requests() -> Self {
        Self::new(
            "Suspicious requests",
            20,
            &[
                "verify account",
                "confirm identity",
                "update payment",
                "click here",
                "download attachment",
                "personal information",
                "social security",
                "bank account",
                "credit card",
            ],
        )
    }

    pub fn financial_incentives() -> Self {
        Self::new(
            "Financial incentives",
            12,
            &[
                "won",
                "winner",
                "prize",
                "lottery",
                "inheritance",
                "million",
                "refund",
                "tax",
                "claim",
            ],
        )
    }

    pub fn threats() -> Self {
        Self::new(
            "Threatening language",
            25,
            &[
                "suspend",
                "close",
                "terminate",
                "legal action",
                "arrest",
                "fine",
                "penalty",
            ],
        )
    }

    pub fn legitimacy() -> Self {
        Self::new(
            "Legitimate indicators",
            -15,
            &[
                "unsubscribe",
                "customer service",
                "official",
                "contact us",
                "privacy policy",
            ],
        )
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Terms found in `search_text`, in list order. The caller lowercases.
    pub fn matches<'a>(&'a self, search_text: &str) -> Vec<&'a str> {
        self.terms
            .iter()
            .filter(|term| search_text.contains(term.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn evaluate(&self, search_text: &str) -> DetectionResult {
        let matched = self.matches(search_text);
        if matched.is_empty() {
            return DetectionResult::no_match(&self.label);
        }

        log::debug!("{}: matched {:?}", self.label, matched);
        DetectionResult::new(
            (matched.len() as i32).saturating_mul(self.weight),
            format!("{}: \"{}\"", self.label, matched.join(", ")),
            &self.label,
        )
    }

    fn normalized(self) -> Result<Self> {
        let mut terms = Vec::with_capacity(self.terms.len());
        for term in self.terms {
            let term = term.trim().to_lowercase();
            if term.is_empty() {
                bail!("pattern list '{}' contains an empty term", self.label);
            }
            terms.push(term);
        }
        Ok(Self {
            label: self.label,
            weight: self.weight,
            terms,
        })
    }
}

/// The five pattern lists, in evaluation order.
///
/// Built once (from defaults or a config file) and then only read.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PatternCatalog {
    #[serde(default = "PatternList::urgency")]
    urgency: PatternList,
    #[serde(default = "PatternList::suspicious_requests")]
    suspicious_requests: PatternList,
    #[serde(default = "PatternList::financial_incentives")]
    financial_incentives: PatternList,
    #[serde(default = "PatternList::threats")]
    threats: PatternList,
    #[serde(default = "PatternList::legitimacy")]
    legitimacy: PatternList,
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self {
            urgency: PatternList::urgency(),
            suspicious_requests: PatternList::suspicious_requests(),
            financial_incentives: PatternList::financial_incentives(),
            threats: PatternList::threats(),
            legitimacy: PatternList::legitimacy(),
        }
    }
}

impl PatternCatalog {
    /// Lists that raise the score, in the order their indicators are reported.
    pub fn risk_lists(&self) -> [&PatternList; 4] {
        [
            &self.urgency,
            &self.suspicious_requests,
            &self.financial_incentives,
            &self.threats,
        ]
    }

    pub fn legitimacy(&self) -> &PatternList {
        &self.legitimacy
    }

    /// Lowercases and trims every term and checks weight signs and bounds.
    pub fn normalized(self) -> Result<Self> {
        let catalog = Self {
            urgency: self.urgency.normalized()?,
            suspicious_requests: self.suspicious_requests.normalized()?,
            financial_incentives: self.financial_incentives.normalized()?,
            threats: self.threats.normalized()?,
            legitimacy: self.legitimacy.normalized()?,
        };

        for list in catalog
            .risk_lists()
            .into_iter()
            .chain(std::iter::once(&catalog.legitimacy))
        {
            if !(-MAX_WEIGHT..=MAX_WEIGHT).contains(&list.weight) {
                bail!(
                    "pattern list '{}' weight {} is outside -{}..={}",
                    list.label,
                    list.weight,
                    MAX_WEIGHT,
                    MAX_WEIGHT
                );
            }
        }

        for list in catalog.risk_lists() {
            if list.weight < 0 {
                bail!(
                    "pattern list '{}' must have a non-negative weight, got {}",
                    list.label,
                    list.weight
                );
            }
        }
        if catalog.legitimacy.weight > 0 {
            bail!(
                "pattern list '{}' must have a non-positive weight, got {}",
                catalog.legitimacy.label,
                catalog.legitimacy.weight
            );
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let catalog = PatternCatalog::default();
        let weights: Vec<i32> = catalog.risk_lists().iter().map(|l| l.weight()).collect();
        assert_eq!(weights, vec![15, 20, 12, 25]);
        assert_eq!(catalog.legitimacy().weight(), -15);
    }

    #[test]
    fn test_substring_matching_ignores_word_boundaries() {
        let urgency = PatternList::urgency();
        assert_eq!(urgency.matches("your account was suspended"), vec!["suspend"]);
        assert_eq!(urgency.matches("reply immediately"), vec!["immediate"]);
        assert!(urgency.matches("nothing to see").is_empty());
    }

    #[test]
    fn test_matches_keep_list_order() {
        let money = PatternList::financial_incentives();
        assert_eq!(
            money.matches("claim your prize, lottery winner"),
            vec!["winner", "prize", "lottery", "claim"]
        );
    }

    #[test]
    fn test_shared_term_matches_in_both_lists() {
        let catalog = PatternCatalog::default();
        let text = "we will suspend your access";
        let [urgency, _, _, threats] = catalog.risk_lists();
        assert_eq!(urgency.matches(text), vec!["suspend"]);
        assert_eq!(threats.matches(text), vec!["suspend"]);
    }

    #[test]
    fn test_evaluate_builds_indicator() {
        let result = PatternList::urgency().evaluate("urgent: act now before the deadline");
        assert!(result.matched);
        assert_eq!(result.points, 45);
        assert_eq!(
            result.reason,
            "Urgent language: \"urgent, act now, deadline\""
        );
    }

    #[test]
    fn test_evaluate_legitimacy_is_negative() {
        let result = PatternList::legitimacy().evaluate("contact us or unsubscribe");
        assert_eq!(result.points, -30);
        assert_eq!(
            result.reason,
            "Legitimate indicators: \"unsubscribe, contact us\""
        );
    }

    #[test]
    fn test_normalized_lowercases_terms() {
        let catalog = PatternCatalog {
            urgency: PatternList::new("Urgent language", 15, &["  URGENT "]),
            ..PatternCatalog::default()
        };
        let catalog = catalog.normalized().unwrap();
        assert_eq!(catalog.risk_lists()[0].terms(), &["urgent".to_string()]);
    }

    #[test]
    fn test_normalized_rejects_empty_term() {
        let catalog = PatternCatalog {
            threats: PatternList::new("Threatening language", 25, &["fine", "  "]),
            ..PatternCatalog::default()
        };
        assert!(catalog.normalized().is_err());
    }

    #[test]
    fn test_normalized_rejects_oversized_weight() {
        let catalog = PatternCatalog {
            threats: PatternList::new("Threatening language", 1_500_000_000, &["arrest", "fine"]),
            ..PatternCatalog::default()
        };
        assert!(catalog.normalized().is_err());

        let catalog = PatternCatalog {
            legitimacy: PatternList::new("Legitimate indicators", -101, &["unsubscribe"]),
            ..PatternCatalog::default()
        };
        assert!(catalog.normalized().is_err());

        let catalog = PatternCatalog {
            threats: PatternList::new("Threatening language", 100, &["arrest"]),
            ..PatternCatalog::default()
        };
        assert!(catalog.normalized().is_ok());
    }

    #[test]
    fn test_evaluate_saturates_huge_weight() {
        let list = PatternList::new("Threatening language", i32::MAX, &["arrest", "fine"]);
        assert_eq!(list.evaluate("arrest fine").points, i32::MAX);
    }

    #[test]
    fn test_normalized_rejects_wrong_sign() {
        let catalog = PatternCatalog {
            legitimacy: PatternList::new("Legitimate indicators", 15, &["unsubscribe"]),
            ..PatternCatalog::default()
        };
        assert!(catalog.normalized().is_err());

        let catalog = PatternCatalog {
            urgency: PatternList::new("Urgent language", -1, &["urgent"]),
            ..PatternCatalog::default()
        };
        assert!(catalog.normalized().is_err());
    }
}
