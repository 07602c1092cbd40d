//! Input normalization.
//!
//! Maps one of the three UI-facing input modes into the canonical
//! [`AnalysisRequest`]. Preconditions (empty text, oversized upload) are
//! checked here, before any request is built; no network calls happen in
//! this component.

use std::path::Path;

use tracing::debug;
use vidgenius_models::{AnalysisRequest, ContentPayload, ContentSource};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};

/// Normalize an input source into the canonical request payload.
///
/// Transcript text and external URLs are passed verbatim (interior
/// whitespace preserved). Video uploads are size-checked against the
/// configured limit and base64-encoded. An empty engagement context is
/// replaced by the configured placeholder sample.
pub fn normalize(
    config: &PipelineConfig,
    source: ContentSource,
    engagement: &str,
) -> PipelineResult<AnalysisRequest> {
    let payload = match source {
        ContentSource::Transcript { text } => {
            if text.trim().is_empty() {
                return Err(PipelineError::invalid_input("Transcript text is empty"));
            }
            ContentPayload::Text { text }
        }
        // The URL is opaque text context for the analysis service. It is
        // not fetched here and no captions are extracted; that limitation
        // is documented to the user, not worked around.
        ContentSource::ExternalReference { url } => {
            if url.trim().is_empty() {
                return Err(PipelineError::invalid_input("Video URL is empty"));
            }
            ContentPayload::Text { text: url }
        }
        ContentSource::VideoUpload { data, media_type } => {
            if data.len() as u64 > config.max_upload_bytes {
                return Err(oversized_upload(config.max_upload_bytes));
            }
            if data.is_empty() {
                return Err(PipelineError::invalid_input("Video file is empty"));
            }
            ContentPayload::video(&data, media_type)
        }
    };

    let engagement_context = if engagement.trim().is_empty() {
        config.default_engagement_context.clone()
    } else {
        engagement.to_string()
    };

    debug!(kind = ?payload.kind(), "Normalized content input");

    Ok(AnalysisRequest {
        payload,
        engagement_context,
    })
}

fn oversized_upload(limit: u64) -> PipelineError {
    PipelineError::invalid_input(format!(
        "Video file exceeds the {} MiB upload limit",
        limit / (1024 * 1024)
    ))
}

/// Read a transcript file as UTF-8 text.
pub async fn read_transcript_file(path: impl AsRef<Path>) -> PipelineResult<String> {
    Ok(tokio::fs::read_to_string(path).await?)
}

/// Read a video file, rejecting oversized files before the read happens.
///
/// Returns the raw bytes together with the media type declared by the
/// file extension (`video/mp4` when unknown).
pub async fn read_video_file(
    config: &PipelineConfig,
    path: impl AsRef<Path>,
) -> PipelineResult<ContentSource> {
    let path = path.as_ref();
    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > config.max_upload_bytes {
        return Err(oversized_upload(config.max_upload_bytes));
    }

    let data = tokio::fs::read(path).await?;
    Ok(ContentSource::VideoUpload {
        data,
        media_type: media_type_for(path).to_string(),
    })
}

fn media_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        _ => "video/mp4",
    }
}
