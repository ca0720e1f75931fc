//! Public entry point: subject and body in, verdict out.

use crate::config::{Config, ScoringConfig};
use crate::detection::patterns::PatternCatalog;
use crate::features::text_stats::{TextFeatures, TextStatsExtractor};
use crate::input::AnalysisInput;
use crate::scoring::Scorer;
use crate::verdict::{RiskLevel, Verdict};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Instant;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub is_phishing: bool,
    pub confidence_percent: u8,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub indicators: Vec<String>,
    pub recommendation: String,
    /// Wall-clock time of the scoring call. Display only.
    pub processing_time_label: String,
    pub details: TextFeatures,
}

/// Immutable scoring engine. Build once and share by reference.
pub struct Analyzer {
    scorer: Scorer,
    scoring: ScoringConfig,
    text_stats: TextStatsExtractor,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(PatternCatalog::default(), ScoringConfig::default())
    }
}

impl Analyzer {
    fn new(catalog: PatternCatalog, scoring: ScoringConfig) -> Self {
        Self {
            scorer: Scorer::new(catalog, &scoring),
            scoring,
            text_stats: TextStatsExtractor::new(),
        }
    }

    /// Builds an analyzer from a config, normalizing and checking it first.
    pub fn from_config(config: &Config) -> Result<Self> {
        let config = config.clone().validated()?;
        Ok(Self::new(config.catalog, config.scoring))
    }

    pub fn catalog(&self) -> &PatternCatalog {
        self.scorer.catalog()
    }

    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        let started = Instant::now();

        let assessment = self.scorer.score(&input.subject, &input.body);
        let verdict = Verdict::from_score(assessment.score, &self.scoring);
        let details = self.text_stats.extract(&input.subject, &input.body);

        let elapsed = started.elapsed();
        log::debug!(
            "Analysis finished: score={} phishing={} confidence={} in {:?}",
            assessment.score,
            verdict.is_phishing,
            verdict.confidence,
            elapsed
        );

        AnalysisResult {
            is_phishing: verdict.is_phishing,
            confidence_percent: verdict.confidence,
            risk_score: assessment.score,
            risk_level: verdict.risk_level,
            indicators: assessment.indicators,
            recommendation: verdict.risk_level.recommendation().to_string(),
            processing_time_label: format!("{:.2}ms", elapsed.as_secs_f64() * 1000.0),
            details,
        }
    }
}

/// Analyzes with the built-in catalog and constants.
pub fn analyze(subject: &str, body: &str) -> AnalysisResult {
    static DEFAULT: OnceLock<Analyzer> = OnceLock::new();
    DEFAULT
        .get_or_init(Analyzer::default)
        .analyze(&AnalysisInput::new(subject, body))
}
