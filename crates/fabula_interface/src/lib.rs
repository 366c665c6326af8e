//! Trait definitions for the Fabula chapter pipeline.
//!
//! This crate defines the seams between the chapter pipeline and its
//! external collaborators: the LLM driver, the scene-splitting generator,
//! and the per-scene prose generator. Implementations live in
//! `fabula_chapter` (LLM-backed) or in test code (mocks).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{SceneSplitter, SceneWriter, StoryDriver};
pub use types::{ChapterContext, ChapterContextBuilder, ChapterExecution};
