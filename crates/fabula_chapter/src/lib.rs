//! Scene pipeline and chapter generation engine for Fabula.
//!
//! This crate turns a chapter outline into assembled chapter prose by
//! orchestrating scene planning, deduplication, and per-scene generation:
//!
//! - **Scene-source selection**: decide whether a cached expanded chapter
//!   outline already carries a usable scene breakdown
//! - **Extraction adapter**: normalize heterogeneous cached scene shapes
//!   (typed records, mappings, bare strings) into [`fabula_core::SceneRecord`]
//! - **Deduplication engine**: collapse exact and near-duplicate scene
//!   outlines before expensive prose generation
//! - **Chapter assembly**: concatenate per-scene prose with normalized
//!   paragraph separation
//! - **LLM collaborators**: driver-backed implementations of the
//!   scene-splitting and prose-writing seams
//!
//! # Example
//!
//! ```rust,ignore
//! use fabula_chapter::{ChapterGenerator, LlmSceneSplitter, LlmSceneWriter};
//! use fabula_interface::ChapterContext;
//!
//! # async fn example(driver: impl fabula_interface::StoryDriver + Clone) -> fabula_error::FabulaResult<()> {
//! let generator = ChapterGenerator::new(
//!     LlmSceneSplitter::new(driver.clone()),
//!     LlmSceneWriter::new(driver),
//! );
//!
//! let ctx = ChapterContext::builder()
//!     .chapter_number(1u32)
//!     .chapter_count(12u32)
//!     .chapter_outline("The crew cases the senate vault.")
//!     .story_outline("A crew of thieves against a corrupt senate.")
//!     .build()?;
//!
//! let execution = generator.execute(&ctx, None).await?;
//! println!("{}", execution.text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembly;
mod dedup;
mod extract;
mod generator;
mod llm;
mod parse;
mod select;

pub use assembly::assemble_chapter;
pub use dedup::dedup_scenes;
pub use extract::extract_scenes;
pub use generator::ChapterGenerator;
pub use llm::{LlmSceneSplitter, LlmSceneWriter};
pub use parse::{extract_json, parse_json};
pub use select::has_usable_scenes;
