use crate::config::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    /// Phishing with high confidence.
    High,
    Medium,
    /// Phishing, but only a few patterns.
    Low,
    /// Legitimate with high confidence.
    Minimal,
    Clear,
}

impl RiskLevel {
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::High => "⚠️ HIGH RISK: Multiple phishing indicators detected. Do not click links, download attachments, or provide personal information. Delete immediately and report to IT security.",
            RiskLevel::Medium => "⚠️ MEDIUM RISK: Likely phishing attempt. Exercise extreme caution. Verify sender through alternative communication channels before taking action.",
            RiskLevel::Low => "⚠️ LOW RISK: Some phishing patterns detected. Be cautious and verify sender authenticity before responding.",
            RiskLevel::Minimal => "✅ LOW RISK: Email appears legitimate. No significant phishing indicators detected.",
            RiskLevel::Clear => "✅ APPEARS LEGITIMATE: Email shows normal patterns, but always maintain good email security practices.",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
            RiskLevel::Minimal => "minimal",
            RiskLevel::Clear => "clear",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub is_phishing: bool,
    pub confidence: u8,
    pub risk_level: RiskLevel,
}

impl Verdict {
    /// Maps a clamped 0-100 risk score to a classification.
    ///
    /// Confidence is floored per branch and capped at the ceiling, so it never
    /// reaches 100.
    pub fn from_score(score: u8, config: &ScoringConfig) -> Self {
        let score = score.min(100);
        let is_phishing = score > config.phishing_threshold;

        let confidence = if is_phishing {
            score.max(config.phishing_confidence_floor)
        } else {
            (100 - score).max(config.legitimate_confidence_floor)
        }
        .min(config.confidence_ceiling);

        let risk_level = match (is_phishing, confidence) {
            (true, c) if c > 85 => RiskLevel::High,
            (true, c) if c > 70 => RiskLevel::Medium,
            (true, _) => RiskLevel::Low,
            (false, c) if c > 85 => RiskLevel::Minimal,
            (false, _) => RiskLevel::Clear,
        };

        Self {
            is_phishing,
            confidence,
            risk_level,
        }
    }
}
