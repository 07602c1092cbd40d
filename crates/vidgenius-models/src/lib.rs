//! Shared data models for the VidGenius content pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - The canonical analysis request (input modes, content payloads)
//! - The structured analysis result and its sections
//! - Platform identifiers for SEO metadata

pub mod analytics;
pub mod highlight;
pub mod request;
pub mod result;
pub mod schedule;
pub mod seo;

// Re-export common types
pub use analytics::AnalyticsSummary;
pub use highlight::Highlight;
pub use request::{AnalysisRequest, ContentKind, ContentPayload, ContentSource};
pub use result::AnalysisResult;
pub use schedule::ScheduleItem;
pub use seo::{Platform, SeoData, SocialMetadata};
