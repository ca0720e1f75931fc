pub mod patterns;

/// Outcome of a single scoring step: one pattern list or one body check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    pub matched: bool,
    pub points: i32,
    pub reason: String,
    pub rule_name: String,
}

impl DetectionResult {
    pub fn new(points: i32, reason: String, rule_name: &str) -> Self {
        Self {
            matched: true,
            points,
            reason,
            rule_name: rule_name.to_string(),
        }
    }

    pub fn no_match(rule_name: &str) -> Self {
        Self {
            matched: false,
            points: 0,
            reason: "No match".to_string(),
            rule_name: rule_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_carries_no_points() {
        let result = DetectionResult::no_match("urgency");
        assert!(!result.matched);
        assert_eq!(result.points, 0);
        assert_eq!(result.rule_name, "urgency");
    }

    #[test]
    fn test_match_keeps_reason() {
        let result = DetectionResult::new(30, "Suspicious URLs detected (1)".to_string(), "links");
        assert!(result.matched);
        assert_eq!(result.points, 30);
        assert_eq!(result.reason, "Suspicious URLs detected (1)");
    }
}
