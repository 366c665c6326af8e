//! Chapter generation orchestration.
//!
//! The generator wires the scene pipeline together: pick a scene source,
//! normalize and deduplicate the scene list, write each scene in order, and
//! assemble the chapter text.

use crate::{assemble_chapter, dedup_scenes, extract_scenes, has_usable_scenes};
use fabula_core::SceneRecord;
use fabula_error::FabulaResult;
use fabula_interface::{ChapterContext, ChapterExecution, SceneSplitter, SceneWriter};
use serde_json::Value;

/// Generates one chapter of prose from a chapter outline.
///
/// Scene data comes from a cached expanded outline when one is usable, and
/// from the scene-splitting collaborator otherwise. Scenes are written
/// strictly sequentially; earlier scenes may feed later ones as context
/// inside the writer, so ordering is semantically required.
///
/// Collaborator failures propagate unchanged. The generator adds no retry
/// semantics of its own; retry policy belongs to the collaborators or to the
/// multi-chapter driver above this crate.
pub struct ChapterGenerator<S: SceneSplitter, W: SceneWriter> {
    splitter: S,
    writer: W,
}

impl<S: SceneSplitter, W: SceneWriter> ChapterGenerator<S, W> {
    /// Create a new chapter generator from its two collaborators.
    pub fn new(splitter: S, writer: W) -> Self {
        Self { splitter, writer }
    }

    /// Generate a chapter, returning the full execution record.
    ///
    /// `expanded` is the optional cached expanded chapter outline; pass
    /// `None` to always use the scene-splitting collaborator.
    ///
    /// # Errors
    ///
    /// Returns an error when the scene splitter or the scene writer fails.
    /// An empty scene list is not an error: it produces an empty chapter.
    #[tracing::instrument(
        skip(self, ctx, expanded),
        fields(
            chapter = *ctx.chapter_number(),
            chapter_count = *ctx.chapter_count(),
            cached_outline = expanded.is_some()
        )
    )]
    pub async fn execute(
        &self,
        ctx: &ChapterContext,
        expanded: Option<&Value>,
    ) -> FabulaResult<ChapterExecution> {
        let scenes = self.resolve_scenes(ctx, expanded).await?;
        let scenes = dedup_scenes(scenes);

        if scenes.is_empty() {
            tracing::warn!("No scenes remain after deduplication; assembling empty chapter");
        }

        let scene_count = scenes.len();
        let mut scene_texts = Vec::with_capacity(scene_count);

        for (index, scene) in scenes.iter().enumerate() {
            let position = index + 1;
            tracing::debug!(
                scene = position,
                scene_count,
                action = scene.action(),
                "Writing scene"
            );
            let text = self
                .writer
                .write_scene(scene, position, scene_count, ctx)
                .await?;
            scene_texts.push(text);
        }

        let text = assemble_chapter(&scene_texts);
        tracing::info!(
            scene_count,
            chapter_length = text.len(),
            "Chapter generation complete"
        );

        Ok(ChapterExecution {
            chapter_number: *ctx.chapter_number(),
            scenes,
            scene_texts,
            text,
        })
    }

    /// Generate a chapter and return just the assembled text.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ChapterGenerator::execute`].
    pub async fn generate_chapter(
        &self,
        ctx: &ChapterContext,
        expanded: Option<&Value>,
    ) -> FabulaResult<String> {
        Ok(self.execute(ctx, expanded).await?.text)
    }

    /// Pick the scene source: cached expanded outline when usable, the
    /// scene-splitting collaborator otherwise.
    async fn resolve_scenes(
        &self,
        ctx: &ChapterContext,
        expanded: Option<&Value>,
    ) -> FabulaResult<Vec<SceneRecord>> {
        if has_usable_scenes(expanded) {
            let elements = expanded
                .and_then(|outline| outline.get("scenes"))
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            return Ok(extract_scenes(elements));
        }

        tracing::debug!("Falling back to scene-splitting generator");
        self.splitter.split_scenes(ctx).await
    }

    /// Get a reference to the scene splitter.
    pub fn splitter(&self) -> &S {
        &self.splitter
    }

    /// Get a reference to the scene writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }
}
