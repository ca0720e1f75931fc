use crate::config::ScoringConfig;
use crate::detection::patterns::PatternCatalog;
use crate::detection::DetectionResult;
use crate::features::{default_checks, BodyCheck};

pub const NO_RISK_INDICATOR: &str =
    "Standard email patterns analyzed - no significant risk factors detected";

/// Clamped risk score and the indicators that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub score: u8,
    pub indicators: Vec<String>,
}

/// Accumulates weighted pattern matches and body checks into a 0-100 score.
pub struct Scorer {
    catalog: PatternCatalog,
    checks: Vec<Box<dyn BodyCheck>>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(PatternCatalog::default(), &ScoringConfig::default())
    }
}

impl Scorer {
    pub fn new(catalog: PatternCatalog, config: &ScoringConfig) -> Self {
        Self {
            catalog,
            checks: default_checks(config),
        }
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn score(&self, subject: &str, body: &str) -> RiskAssessment {
        let search_text = format!("{} {}", subject, body).to_lowercase();

        let mut results: Vec<DetectionResult> = self
            .catalog
            .risk_lists()
            .iter()
            .map(|list| list.evaluate(&search_text))
            .collect();
        results.push(self.catalog.legitimacy().evaluate(&search_text));
        results.extend(self.checks.iter().map(|check| check.check(body)));

        let mut total: i32 = 0;
        let mut indicators = Vec::new();
        for result in results.into_iter().filter(|r| r.matched) {
            total = total.saturating_add(result.points);
            indicators.push(result.reason);
        }

        let score = total.clamp(0, 100) as u8;
        log::debug!("Raw score {} clamped to {}", total, score);

        if indicators.is_empty() {
            indicators.push(NO_RISK_INDICATOR.to_string());
        }

        RiskAssessment { score, indicators }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(subject: &str, body: &str) -> RiskAssessment {
        Scorer::default().score(subject, body)
    }

    #[test]
    fn test_empty_input() {
        let result = score("", "");
        assert_eq!(result.score, 0);
        assert_eq!(result.indicators, vec![NO_RISK_INDICATOR.to_string()]);
    }

    #[test]
    fn test_weighted_lists_accumulate() {
        let result = score("urgent", "please verify account, you won");
        assert_eq!(result.score, 47);
        assert_eq!(
            result.indicators,
            vec![
                "Urgent language: \"urgent\"",
                "Suspicious requests: \"verify account\"",
                "Financial incentives: \"won\"",
            ]
        );
    }

    #[test]
    fn test_subject_and_body_are_case_insensitive() {
        let result = score("URGENT", "Claim Now");
        assert_eq!(result.score, 27);
    }

    #[test]
    fn test_legitimacy_clamps_at_zero() {
        let result = score("", "unsubscribe");
        assert_eq!(result.score, 0);
        assert_eq!(
            result.indicators,
            vec!["Legitimate indicators: \"unsubscribe\""]
        );
    }

    #[test]
    fn test_legitimacy_offsets_before_clamp() {
        // urgency 15, threat 25, legitimacy -15
        let result = score("Suspend notice", "contact us");
        assert_eq!(result.score, 25);
        assert_eq!(
            result.indicators,
            vec![
                "Urgent language: \"suspend\"",
                "Threatening language: \"suspend\"",
                "Legitimate indicators: \"contact us\"",
            ]
        );
    }

    #[test]
    fn test_score_clamped_to_100() {
        let result = score(
            "urgent immediate deadline",
            "verify account click here credit card lottery prize arrest penalty",
        );
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_links_only_checked_in_body() {
        let result = score("http://evil-site.ru/login", "hello");
        assert_eq!(result.score, 0);

        let result = score("hello", "go http://evil-site.ru/login");
        assert_eq!(
            result.indicators,
            vec![
                "Suspicious URLs detected (1)",
                "Grammar/formatting issues detected (1)",
            ]
        );
        // 30 for the link, 8 for ".r" directly after a period
        assert_eq!(result.score, 38);
    }

    #[test]
    fn test_formatting_only_checked_in_body() {
        assert_eq!(score("AAAA!!", "").score, 0);
        assert_eq!(score("", "AAAA!!").score, 16);
    }

    #[test]
    fn test_evaluation_order_of_indicators() {
        let result = score(
            "Final deadline",
            "Your refund is ready. Contact us at http://refunds.example.io TODAY!!",
        );
        assert_eq!(
            result.indicators,
            vec![
                "Urgent language: \"deadline\"",
                "Financial incentives: \"refund\"",
                "Legitimate indicators: \"contact us\"",
                "Suspicious URLs detected (1)",
                "Grammar/formatting issues detected (3)",
            ]
        );
        // 15 + 12 - 15 + 30 + 24
        assert_eq!(result.score, 66);
    }

    #[test]
    fn test_unvalidated_huge_weights_clamp_instead_of_overflowing() {
        let catalog: PatternCatalog = serde_yaml::from_str(
            r#"
threats:
  label: "Threatening language"
  weight: 1500000000
  terms: ["arrest", "fine"]
legitimacy:
  label: "Legitimate indicators"
  weight: -2000000000
  terms: ["unsubscribe", "contact us"]
"#,
        )
        .unwrap();
        let scorer = Scorer::new(catalog, &ScoringConfig::default());
        assert_eq!(scorer.score("", "arrest fine").score, 100);
        assert_eq!(scorer.score("", "arrest fine unsubscribe contact us").score, 0);
    }

    #[test]
    fn test_idempotent() {
        let scorer = Scorer::default();
        let first = scorer.score("Urgent", "Click here!! http://x.biz");
        let second = scorer.score("Urgent", "Click here!! http://x.biz");
        assert_eq!(first, second);
    }
}
