//! Platform SEO metadata models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// SEO metadata for a single platform.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Target publishing platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Platform {
    YoutubeShorts,
    TikTok,
    InstagramReels,
    Facebook,
}

impl Platform {
    /// All supported platforms, in rendering order.
    pub const ALL: [Platform; 4] = [
        Platform::YoutubeShorts,
        Platform::TikTok,
        Platform::InstagramReels,
        Platform::Facebook,
    ];

    /// Display name for the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YoutubeShorts => "YouTube Shorts",
            Self::TikTok => "TikTok",
            Self::InstagramReels => "Instagram Reels",
            Self::Facebook => "Facebook",
        }
    }
}

/// Per-platform SEO metadata.
///
/// Modeled as a record with exactly four named fields so all platforms are
/// always present; renderers iterate [`Platform::ALL`] rather than
/// introspecting keys.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeoData {
    pub youtube_shorts: SocialMetadata,
    pub tik_tok: SocialMetadata,
    pub instagram_reels: SocialMetadata,
    pub facebook: SocialMetadata,
}

impl SeoData {
    /// Get the metadata for a specific platform.
    pub fn for_platform(&self, platform: Platform) -> &SocialMetadata {
        match platform {
            Platform::YoutubeShorts => &self.youtube_shorts,
            Platform::TikTok => &self.tik_tok,
            Platform::InstagramReels => &self.instagram_reels,
            Platform::Facebook => &self.facebook,
        }
    }
}
