//! Client for the Gemini structured-generation API.
//!
//! This crate provides:
//! - Wire types for `generateContent` requests and responses
//! - The response schema that constrains generation to the analysis shape
//! - A one-shot HTTP client returning the raw candidate text
//! - A decoder from raw text to a typed [`vidgenius_models::AnalysisResult`]

pub mod client;
pub mod decode;
pub mod error;
pub mod schema;
pub mod types;

pub use client::{AnalysisBackend, GeminiClient, GeminiConfig};
pub use decode::decode_analysis;
pub use error::{GeminiError, GeminiResult};
pub use schema::analysis_response_schema;
pub use types::{Content, GenerateContentRequest, GenerationConfig, InlineData, Part};
