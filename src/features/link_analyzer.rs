use super::BodyCheck;
use crate::config::ScoringConfig;
use crate::detection::DetectionResult;
use regex::Regex;

/// Flags bodies carrying http(s) links outside the trusted top-level domains.
///
/// The test is a plain substring test on the whole URL, so a marker found in
/// the path also counts as trusted.
pub struct LinkAnalyzer {
    link_regex: Regex,
    trusted_markers: Vec<String>,
    penalty: i32,
}

impl Default for LinkAnalyzer {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl LinkAnalyzer {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            link_regex: link_regex(),
            trusted_markers: config.trusted_url_markers.clone(),
            penalty: config.suspicious_url_penalty,
        }
    }

    pub fn extract_links<'a>(&self, body: &'a str) -> Vec<&'a str> {
        self.link_regex
            .find_iter(body)
            .map(|m| m.as_str())
            .collect()
    }

    pub fn is_link_suspicious(&self, url: &str) -> bool {
        !self
            .trusted_markers
            .iter()
            .any(|marker| url.contains(marker.as_str()))
    }
}

pub(crate) fn link_regex() -> Regex {
    Regex::new(r"(?i)https?://\S+").expect("link pattern is valid")
}

impl BodyCheck for LinkAnalyzer {
    fn check(&self, body: &str) -> DetectionResult {
        let suspicious: Vec<&str> = self
            .extract_links(body)
            .into_iter()
            .filter(|url| self.is_link_suspicious(url))
            .collect();

        if suspicious.is_empty() {
            return DetectionResult::no_match(self.name());
        }

        log::debug!("Suspicious links: {:?}", suspicious);
        DetectionResult::new(
            self.penalty,
            format!("Suspicious URLs detected ({})", suspicious.len()),
            self.name(),
        )
    }

    fn name(&self) -> &str {
        "link_analyzer"
    }
}
