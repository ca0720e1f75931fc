use crate::config::InputLimits;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisInput {
    pub subject: String,
    pub body: String,
}

impl AnalysisInput {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Splits a stored message into its `Subject:` header and body.
    ///
    /// Headers end at the first blank line. Folded header lines are joined
    /// with a single space. If any line before the first blank line is not a
    /// header or a fold, the whole text is taken as body.
    pub fn from_message(raw: &str) -> Self {
        let lines: Vec<&str> = raw.lines().collect();
        let header_end = lines
            .iter()
            .position(|line| line.trim().is_empty())
            .unwrap_or(lines.len());
        let (headers, rest) = lines.split_at(header_end);

        let mut subject: Option<String> = None;
        let mut last_header: Option<String> = None;

        for line in headers {
            if line.starts_with(' ') || line.starts_with('\t') {
                match last_header.as_deref() {
                    None => return Self::new("", raw),
                    Some("subject") => {
                        if let Some(existing) = subject.as_mut() {
                            existing.push(' ');
                            existing.push_str(line.trim());
                        }
                    }
                    Some(_) => {}
                }
                continue;
            }

            match line.split_once(':') {
                Some((key, value)) if is_header_name(key) => {
                    let key = key.to_lowercase();
                    if key == "subject" && subject.is_none() {
                        subject = Some(value.trim().to_string());
                    }
                    last_header = Some(key);
                }
                _ => {
                    log::debug!("No header block, using the whole message as body");
                    return Self::new("", raw);
                }
            }
        }

        let body = rest.get(1..).unwrap_or_default().join("\n");
        Self::new(subject.unwrap_or_default(), body)
    }

    /// Trims both fields and enforces caller-side limits.
    ///
    /// The engine accepts any text; these rules only apply at the edges.
    pub fn validated(self, limits: &InputLimits) -> Result<Self> {
        let subject = self.subject.trim().to_string();
        let body = self.body.trim().to_string();

        if body.is_empty() {
            bail!("Please enter email content to analyze.");
        }
        if subject.chars().count() > limits.max_subject_length {
            bail!(
                "Subject is longer than {} characters",
                limits.max_subject_length
            );
        }
        if body.chars().count() > limits.max_body_length {
            bail!(
                "Email body is longer than {} characters",
                limits.max_body_length
            );
        }

        Ok(Self { subject, body })
    }
}

fn is_header_name(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
