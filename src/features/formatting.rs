use super::BodyCheck;
use crate::config::ScoringConfig;
use crate::detection::DetectionResult;
use regex::Regex;

/// Superficial grammar and formatting anomalies.
///
/// Each kind of anomaly counts once, however often it appears.
pub struct FormattingAnalyzer {
    issue_patterns: Vec<(&'static str, Regex)>,
    penalty_per_issue: i32,
}

impl Default for FormattingAnalyzer {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl FormattingAnalyzer {
    pub fn from_config(config: &ScoringConfig) -> Self {
        let issue_patterns = vec![
            ("repeated exclamation", r"!{2,}"),
            ("repeated question", r"\?{2,}"),
            ("shouting", r"\b[A-Z]{4,}\b"),
            ("missing space after punctuation", r"[.!?][a-zA-Z]"),
        ]
        .into_iter()
        .map(|(name, pattern)| {
            (
                name,
                Regex::new(pattern).expect("formatting pattern is valid"),
            )
        })
        .collect();

        Self {
            issue_patterns,
            penalty_per_issue: config.formatting_issue_penalty,
        }
    }

    pub fn issues<'a>(&'a self, body: &str) -> Vec<&'a str> {
        self.issue_patterns
            .iter()
            .filter(|(_, pattern)| pattern.is_match(body))
            .map(|(name, _)| *name)
            .collect()
    }
}

impl BodyCheck for FormattingAnalyzer {
    fn check(&self, body: &str) -> DetectionResult {
        let issues = self.issues(body);
        if issues.is_empty() {
            return DetectionResult::no_match(self.name());
        }

        log::debug!("Formatting issues: {:?}", issues);
        DetectionResult::new(
            (issues.len() as i32).saturating_mul(self.penalty_per_issue),
            format!("Grammar/formatting issues detected ({})", issues.len()),
            self.name(),
        )
    }

    fn name(&self) -> &str {
        "formatting"
    }
}
