//! Pipeline orchestrator.
//!
//! Stages run strictly in order per invocation: normalize, build, generate,
//! decode. The pipeline holds no result state between invocations; the
//! caller owns the session (see [`crate::session`]).

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};
use uuid::Uuid;
use vidgenius_gemini::{decode_analysis, AnalysisBackend};
use vidgenius_models::{AnalysisResult, ContentSource};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::normalize::normalize;
use crate::request::build_generation_request;

/// The content analysis pipeline.
///
/// Generic over the structured-generation backend so the concrete service
/// can be stubbed in tests. At most one invocation is in flight at a time;
/// a concurrent second submission is rejected with [`PipelineError::Busy`]
/// rather than interleaved.
pub struct AnalysisPipeline<B> {
    backend: B,
    config: PipelineConfig,
    in_flight: AtomicBool,
}

impl<B: AnalysisBackend> AnalysisPipeline<B> {
    pub fn new(backend: B, config: PipelineConfig) -> Self {
        Self {
            backend,
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run one full analysis.
    ///
    /// Suspends only at the external generation call (file reads happen in
    /// the normalizer's file helpers before this is invoked). Every failure
    /// propagates; nothing is recovered locally.
    pub async fn run(
        &self,
        source: ContentSource,
        engagement: &str,
    ) -> PipelineResult<AnalysisResult> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;
        let request_id = Uuid::new_v4();

        let request = normalize(&self.config, source, engagement)?;
        info!(
            request_id = %request_id,
            kind = ?request.kind(),
            "Starting content analysis"
        );

        let wire_request = build_generation_request(&request);

        let raw = self.backend.generate(&wire_request).await.map_err(|e| {
            warn!(request_id = %request_id, error = %e, "Analysis call failed");
            e
        })?;

        let result = decode_analysis(&raw).map_err(|e| {
            warn!(
                request_id = %request_id,
                error = %e,
                "Service response did not decode into a result"
            );
            e
        })?;

        info!(
            request_id = %request_id,
            highlights = result.highlights.len(),
            schedule_items = result.schedule.len(),
            "Content analysis completed"
        );
        Ok(result)
    }
}

/// RAII guard for the at-most-one-in-flight invariant.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> PipelineResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| PipelineError::Busy)?;
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
