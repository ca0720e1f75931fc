use super::link_analyzer::link_regex;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Informational facts about a message. None of these affect the score.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextFeatures {
    pub char_count: usize,
    pub word_count: usize,
    pub links: Vec<LinkDetail>,
    pub email_addresses: Vec<String>,
    pub phone_numbers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkDetail {
    pub url: String,
    /// `None` when the token does not parse as a URL.
    pub host: Option<String>,
}

pub struct TextStatsExtractor {
    link_regex: Regex,
    email_regex: Regex,
    phone_regex: Regex,
}

impl Default for TextStatsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStatsExtractor {
    pub fn new() -> Self {
        Self {
            link_regex: link_regex(),
            email_regex: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("email pattern is valid"),
            phone_regex: Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b")
                .expect("phone pattern is valid"),
        }
    }

    /// Features of the subject line and body taken together, with runs of
    /// whitespace collapsed.
    pub fn extract(&self, subject: &str, body: &str) -> TextFeatures {
        let text = format!("Subject: {} {}", subject, body)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        let links = self
            .link_regex
            .find_iter(&text)
            .map(|m| LinkDetail {
                url: m.as_str().to_string(),
                host: Url::parse(m.as_str())
                    .ok()
                    .and_then(|u| u.host_str().map(str::to_lowercase)),
            })
            .collect();

        TextFeatures {
            char_count: text.chars().count(),
            word_count: text.split(' ').filter(|w| !w.is_empty()).count(),
            links,
            email_addresses: collect_matches(&self.email_regex, &text),
            phone_numbers: collect_matches(&self.phone_regex, &text),
        }
    }
}

fn collect_matches(regex: &Regex, text: &str) -> Vec<String> {
    regex
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        let features = TextStatsExtractor::new().extract("", "");
        assert_eq!(features.word_count, 1);
        assert_eq!(features.char_count, "Subject:".len());
        assert!(features.links.is_empty());
    }

    #[test]
    fn test_whitespace_collapsed() {
        let features = TextStatsExtractor::new().extract("Hi", "one\n\n  two\tthree");
        assert_eq!(features.word_count, 5);
        assert_eq!(features.char_count, "Subject: Hi one two three".len());
    }

    #[test]
    fn test_links_with_hosts() {
        let features = TextStatsExtractor::new()
            .extract("", "See https://Login.Example.ru/a and http://[bad");
        assert_eq!(
            features.links,
            vec![
                LinkDetail {
                    url: "https://Login.Example.ru/a".to_string(),
                    host: Some("login.example.ru".to_string()),
                },
                LinkDetail {
                    url: "http://[bad".to_string(),
                    host: None,
                },
            ]
        );
    }

    #[test]
    fn test_contacts() {
        let features = TextStatsExtractor::new().extract(
            "Contact",
            "Mail support@bank.example.com or call 555-123-4567 (ref 12345).",
        );
        assert_eq!(features.email_addresses, vec!["support@bank.example.com"]);
        assert_eq!(features.phone_numbers, vec!["555-123-4567"]);
    }
}
