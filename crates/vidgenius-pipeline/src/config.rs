//! Pipeline configuration.

/// Upload size limit: 20 MiB, matching the client-side rejection threshold.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// Placeholder engagement sample used when the user leaves the field blank.
pub const DEFAULT_ENGAGEMENT_CONTEXT: &str = "Views: 1000, Likes: 150, Comments: 20";

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum accepted video upload size in bytes
    pub max_upload_bytes: u64,
    /// Engagement context substituted for empty input
    pub default_engagement_context: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            default_engagement_context: DEFAULT_ENGAGEMENT_CONTEXT.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            max_upload_bytes: std::env::var("VIDGENIUS_MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            default_engagement_context: std::env::var("VIDGENIUS_ENGAGEMENT_CONTEXT")
                .unwrap_or_else(|_| DEFAULT_ENGAGEMENT_CONTEXT.to_string()),
        }
    }
}
