//! Canonical analysis request models.
//!
//! Input modes are a tagged variant rather than a mode string plus optional
//! fields, so invalid combinations (e.g. a binary payload tagged as text)
//! cannot be represented.

use base64::Engine;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the three UI-facing input modes, before normalization.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum ContentSource {
    /// Pasted or uploaded transcript text.
    Transcript { text: String },

    /// A referenced external video URL. The URL is passed downstream as
    /// opaque text context; it is never fetched or validated here.
    ExternalReference { url: String },

    /// An uploaded video file.
    VideoUpload {
        #[serde(with = "serde_bytes_base64")]
        #[schemars(with = "String")]
        data: Vec<u8>,
        media_type: String,
    },
}

/// How the content payload is interpreted downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Text,
    VideoBinary,
}

/// The normalized content payload embedded in a generation request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ContentPayload {
    /// Transcript text or an external URL, passed verbatim.
    Text { text: String },

    /// Video bytes encoded for transport, with the declared media type.
    VideoBinary { media_type: String, data_base64: String },
}

impl ContentPayload {
    /// Encode raw video bytes into a transportable payload.
    pub fn video(data: &[u8], media_type: impl Into<String>) -> Self {
        Self::VideoBinary {
            media_type: media_type.into(),
            data_base64: base64::engine::general_purpose::STANDARD.encode(data),
        }
    }

    /// Decode a video payload back to its original bytes.
    pub fn decode_video(&self) -> Option<Vec<u8>> {
        match self {
            Self::VideoBinary { data_base64, .. } => base64::engine::general_purpose::STANDARD
                .decode(data_base64)
                .ok(),
            Self::Text { .. } => None,
        }
    }

    /// The content kind this payload carries.
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Text { .. } => ContentKind::Text,
            Self::VideoBinary { .. } => ContentKind::VideoBinary,
        }
    }

    /// Whether the payload carries any content at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text { text } => text.trim().is_empty(),
            Self::VideoBinary { data_base64, .. } => data_base64.is_empty(),
        }
    }
}

/// The canonical payload sent downstream, constructed fresh per submission
/// and discarded after sending.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRequest {
    pub payload: ContentPayload,

    /// Free-form description of prior engagement statistics. Always present,
    /// never empty; callers substitute a placeholder sample when the user
    /// leaves it blank.
    pub engagement_context: String,
}

impl AnalysisRequest {
    pub fn kind(&self) -> ContentKind {
        self.payload.kind()
    }
}

mod serde_bytes_base64 {
    //! Serialize raw upload bytes as base64 strings in JSON.

    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(serde::de::Error::custom)
    }
}
