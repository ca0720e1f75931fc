use crate::detection::patterns::{PatternCatalog, MAX_WEIGHT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub catalog: PatternCatalog,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub input: InputLimits,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

/// Tuning constants for the body checks and the verdict.
///
/// The defaults are the calibrated values; changing them is a recalibration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Flat penalty when at least one URL lacks every trusted marker.
    pub suspicious_url_penalty: i32,
    pub trusted_url_markers: Vec<String>,
    pub formatting_issue_penalty: i32,
    /// Scores strictly above this are phishing.
    pub phishing_threshold: u8,
    pub phishing_confidence_floor: u8,
    pub legitimate_confidence_floor: u8,
    pub confidence_ceiling: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            suspicious_url_penalty: 30,
            trusted_url_markers: vec![".com".to_string(), ".org".to_string(), ".gov".to_string()],
            formatting_issue_penalty: 8,
            phishing_threshold: 45,
            phishing_confidence_floor: 65,
            legitimate_confidence_floor: 70,
            confidence_ceiling: 97,
        }
    }
}

/// Caller-side limits checked before the engine runs. The engine itself
/// accepts any text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InputLimits {
    pub max_subject_length: usize,
    pub max_body_length: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_subject_length: 200,
            max_body_length: 10_000,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validated()
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config")?;
        fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn validated(mut self) -> Result<Self> {
        self.catalog = self
            .catalog
            .normalized()
            .context("Invalid pattern catalog")?;
        self.scoring = self.scoring.validated()?;
        Ok(self)
    }
}

impl ScoringConfig {
    fn validated(mut self) -> Result<Self> {
        for (name, penalty) in [
            ("suspicious_url_penalty", self.suspicious_url_penalty),
            ("formatting_issue_penalty", self.formatting_issue_penalty),
        ] {
            if !(0..=MAX_WEIGHT).contains(&penalty) {
                anyhow::bail!("{} must be within 0..={}, got {}", name, MAX_WEIGHT, penalty);
            }
        }
        if self.confidence_ceiling > 100 {
            anyhow::bail!(
                "confidence_ceiling must be at most 100, got {}",
                self.confidence_ceiling
            );
        }
        if self.phishing_threshold >= 100 {
            anyhow::bail!(
                "phishing_threshold must be below 100, got {}",
                self.phishing_threshold
            );
        }
        self.trusted_url_markers = self
            .trusted_url_markers
            .into_iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        Ok(self)
    }
}
