//! Simulated analytics report models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A brief analytics projection derived from the engagement context.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// The clip expected to perform best
    pub top_clip: String,

    /// Hashtags expected to drive the most reach
    pub best_hashtags: Vec<String>,

    /// Suggested improvements for future content
    pub improvements: Vec<String>,
}
