//! Trait definitions for LLM backends and scene generation collaborators.

use crate::ChapterContext;
use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse, SceneRecord};
use fabula_error::FabulaResult;

/// Core trait that all LLM backends must implement.
///
/// This provides the minimal interface for synchronous text generation.
/// Provider-specific concerns (retry, rate limiting, URL parsing) live
/// behind this seam and are opaque to the chapter pipeline.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Generate model output for a text request.
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse>;

    /// Provider name (e.g., "anthropic", "openai", "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-3-5-sonnet-20241022").
    fn model_name(&self) -> &str;
}

/// Splits a chapter outline into an ordered scene list.
///
/// This is the fallback path used when no cached expanded outline supplies
/// usable scene data. Provider failures propagate unchanged; the chapter
/// pipeline adds no retry semantics of its own.
#[async_trait]
pub trait SceneSplitter: Send + Sync {
    /// Produce an ordered scene list for the chapter described by `ctx`.
    async fn split_scenes(&self, ctx: &ChapterContext) -> FabulaResult<Vec<SceneRecord>>;
}

/// Generates prose for one scene of a chapter.
///
/// Scenes are written strictly in order: each call may use prose from
/// earlier scenes as context, so ordering is semantically required.
#[async_trait]
pub trait SceneWriter: Send + Sync {
    /// Write prose for `scene`.
    ///
    /// `scene_number` is the 1-based position within the chapter after
    /// deduplication (not the record's own `scene_number` field), and
    /// `scene_count` is the post-deduplication total.
    async fn write_scene(
        &self,
        scene: &SceneRecord,
        scene_number: usize,
        scene_count: usize,
        ctx: &ChapterContext,
    ) -> FabulaResult<String>;
}
