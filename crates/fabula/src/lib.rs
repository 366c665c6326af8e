//! Fabula - LLM-driven long-form fiction pipeline
//!
//! Fabula generates long-form fictional narratives chapter by chapter,
//! validating and reusing structured scene data between pipeline stages.
//! The scene pipeline decides when a cached expanded chapter outline can be
//! reused, collapses near-duplicate scene outlines before expensive prose
//! calls, and assembles per-scene prose into chapter text.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fabula::{ChapterContext, ChapterGenerator, LlmSceneSplitter, LlmSceneWriter};
//!
//! # async fn example(driver: impl fabula::StoryDriver + Clone) -> fabula::FabulaResult<()> {
//! fabula::init_console_telemetry()?;
//!
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
//! let chapter = generator.generate_chapter(&ctx, None).await?;
//! println!("{chapter}");
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Fabula is organized as a workspace with focused crates:
//!
//! - `fabula_core` - Core data types (SceneRecord, SceneSource, requests)
//! - `fabula_interface` - StoryDriver, SceneSplitter, and SceneWriter traits
//! - `fabula_error` - Error types
//! - `fabula_chapter` - Scene pipeline and chapter generation engine
//!
//! This crate (`fabula`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod telemetry;

pub use telemetry::init_console_telemetry;

pub use fabula_chapter::{
    assemble_chapter, dedup_scenes, extract_json, extract_scenes, has_usable_scenes, parse_json,
    ChapterGenerator, LlmSceneSplitter, LlmSceneWriter,
};
pub use fabula_core::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, Message, MessageBuilder, Role,
    SceneRecord, SceneRecordBuilder, SceneSource,
};
pub use fabula_error::{
    BackendError, BuilderError, BuilderErrorKind, ChapterError, ChapterErrorKind, FabulaError,
    FabulaErrorKind, FabulaResult, JsonError,
};
pub use fabula_interface::{
    ChapterContext, ChapterContextBuilder, ChapterExecution, SceneSplitter, SceneWriter,
    StoryDriver,
};
