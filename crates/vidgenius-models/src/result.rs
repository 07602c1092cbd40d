//! The validated structured analysis result.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{AnalyticsSummary, Highlight, ScheduleItem, SeoData};

/// The full bundle of repurposing assets returned by one analysis.
///
/// Every section is required: a result is either fully present and fully
/// validated, or absent. Deserialization fails when any section is missing;
/// unknown extra fields from the service are tolerated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Transcript with filler words removed and grammar corrected
    pub cleaned_transcript: String,

    /// Highlight clips (the instruction contract asks for 3)
    pub highlights: Vec<Highlight>,

    /// Per-platform SEO metadata
    pub seo: SeoData,

    /// SRT-format subtitle block for the highlights
    pub captions: String,

    /// Advisory FFmpeg command block (free text, not machine-parsed)
    pub ffmpeg_commands: String,

    /// 7-day posting schedule
    pub schedule: Vec<ScheduleItem>,

    /// Simulated analytics report
    pub analytics_report: AnalyticsSummary,
}
