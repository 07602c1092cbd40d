//! Highlight models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A short-form excerpt candidate selected from the source content.
///
/// The `timestamp` field is a soft `"MM:SS - MM:SS"` contract: consumers
/// that derive cut commands from it fall back to a full-file copy when the
/// format does not hold, rather than treating it as an error.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    /// Start and end time, e.g. "00:15 - 00:45"
    pub timestamp: String,

    /// The text content of the highlight
    pub snippet: String,

    /// Why this was selected (emotional hook, quote, etc.)
    pub reason: String,

    /// A catchy, viral title for this short clip
    pub title: String,

    /// A detailed prompt for an AI image generator to create a
    /// thumbnail/cover for this specific clip
    pub visual_prompt: String,
}

impl Highlight {
    /// Split the timestamp into trimmed (start, end) marks, if well-formed.
    pub fn time_range(&self) -> Option<(&str, &str)> {
        let mut parts = self.timestamp.split('-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => Some((start.trim(), end.trim())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(ts: &str) -> Highlight {
        Highlight {
            timestamp: ts.to_string(),
            snippet: "snippet".to_string(),
            reason: "strong hook".to_string(),
            title: "Title".to_string(),
            visual_prompt: "prompt".to_string(),
        }
    }

    #[test]
    fn test_time_range_well_formed() {
        let h = highlight("00:15 - 00:45");
        assert_eq!(h.time_range(), Some(("00:15", "00:45")));
    }

    #[test]
    fn test_time_range_malformed() {
        assert_eq!(highlight("not a range").time_range(), None);
        assert_eq!(highlight("00:15 - 00:30 - 00:45").time_range(), None);
    }

    #[test]
    fn test_serde_field_names() {
        let h = highlight("00:00 - 00:10");
        let json = serde_json::to_value(&h).unwrap();
        assert!(json.get("visualPrompt").is_some());
        assert!(json.get("visual_prompt").is_none());
    }
}
