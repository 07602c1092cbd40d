//! Content analysis pipeline.
//!
//! This crate provides:
//! - Input normalization for the three content modes
//! - Generation-request assembly (instruction + schema + content parts)
//! - The pipeline orchestrator with an at-most-one-in-flight guard
//! - Derived cut commands computed from validated highlights
//! - Caller-owned session state for the single active result

pub mod config;
pub mod cut;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod request;
pub mod session;

pub use config::PipelineConfig;
pub use cut::{cut_commands_for, derive_cut_command};
pub use error::{PipelineError, PipelineResult};
pub use normalize::normalize;
pub use pipeline::AnalysisPipeline;
pub use request::build_generation_request;
pub use session::AnalysisSession;
