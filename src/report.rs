use crate::analyzer::AnalysisResult;
use anyhow::{Context, Result};
use std::fmt;

pub fn status_label(result: &AnalysisResult) -> &'static str {
    if result.is_phishing {
        "🚨 PHISHING DETECTED"
    } else {
        "✅ LEGITIMATE EMAIL"
    }
}

/// Human-readable report for one analysis.
pub struct TextReport<'a>(pub &'a AnalysisResult);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let heading = if result.is_phishing {
            "🔍 Risk Factors:"
        } else {
            "📊 Analysis Results:"
        };

        writeln!(f, "{}", status_label(result))?;
        writeln!(
            f,
            "   Confidence Level: {}% (risk score {}/100)",
            result.confidence_percent, result.risk_score
        )?;
        writeln!(f, "   Analysis time: {}", result.processing_time_label)?;
        writeln!(f)?;
        writeln!(f, "{}", heading)?;
        for indicator in &result.indicators {
            writeln!(f, "  • {}", indicator)?;
        }
        writeln!(f)?;
        writeln!(f, "💡 Recommendation:")?;
        writeln!(f, "   {}", result.recommendation)?;

        let details = &result.details;
        if details.links.is_empty()
            && details.email_addresses.is_empty()
            && details.phone_numbers.is_empty()
        {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "📎 Details:")?;
        for link in &details.links {
            writeln!(
                f,
                "  • Link: {} ({})",
                link.url,
                link.host.as_deref().unwrap_or("unparseable")
            )?;
        }
        for address in &details.email_addresses {
            writeln!(f, "  • Address: {}", address)?;
        }
        for phone in &details.phone_numbers {
            writeln!(f, "  • Phone: {}", phone)?;
        }
        Ok(())
    }
}

pub fn render_text(result: &AnalysisResult) -> String {
    TextReport(result).to_string()
}

pub fn render_json(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize analysis result")
}
