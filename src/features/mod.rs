pub mod formatting;
pub mod link_analyzer;
pub mod text_stats;

use crate::config::ScoringConfig;
use crate::detection::DetectionResult;

/// A check that inspects the raw (original case) body text.
pub trait BodyCheck: Send + Sync {
    fn check(&self, body: &str) -> DetectionResult;
    fn name(&self) -> &str;
}

/// Body checks in the order their indicators are reported.
pub fn default_checks(config: &ScoringConfig) -> Vec<Box<dyn BodyCheck>> {
    vec![
        Box::new(link_analyzer::LinkAnalyzer::from_config(config)),
        Box::new(formatting::FormattingAnalyzer::from_config(config)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_order() {
        let checks = default_checks(&ScoringConfig::default());
        let names: Vec<&str> = checks.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["link_analyzer", "formatting"]);
    }
}
