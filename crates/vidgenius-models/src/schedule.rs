//! Publishing schedule models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single slot in the 7-day publishing schedule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    /// Day of the week ("Day 1" - "Day 7")
    pub day: String,

    /// Target platform
    pub platform: String,

    /// Best local posting time
    pub time: String,

    /// Title of the content to post
    pub content_title: String,
}
