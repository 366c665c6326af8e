//! Shared types for chapter generation.

use fabula_core::SceneRecord;
use serde::{Deserialize, Serialize};

/// Inputs describing the chapter to generate.
///
/// # Examples
///
/// ```
/// use fabula_interface::ChapterContext;
///
/// let ctx = ChapterContext::builder()
///     .chapter_number(3u32)
///     .chapter_count(12u32)
///     .chapter_outline("The heist goes wrong.")
///     .story_outline("A crew of thieves against a corrupt senate.")
///     .build()
///     .unwrap();
///
/// assert_eq!(*ctx.chapter_number(), 3);
/// assert!(ctx.base_context().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ChapterContext {
    /// 1-based chapter number within the story
    chapter_number: u32,
    /// Total number of chapters planned for the story
    chapter_count: u32,
    /// Textual outline of this chapter
    chapter_outline: String,
    /// Full story outline
    story_outline: String,
    /// Optional base context (world notes, style guidance)
    #[builder(default)]
    base_context: Option<String>,
}

impl ChapterContext {
    /// Create a builder for a new chapter context.
    pub fn builder() -> ChapterContextBuilder {
        ChapterContextBuilder::default()
    }
}

/// Complete result of generating one chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterExecution {
    /// Chapter number this execution belongs to.
    pub chapter_number: u32,

    /// The deduplicated scene list the chapter was written from.
    pub scenes: Vec<SceneRecord>,

    /// Generated prose per scene, in narration order.
    pub scene_texts: Vec<String>,

    /// The assembled chapter text.
    pub text: String,
}
