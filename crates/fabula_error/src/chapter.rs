//! Chapter pipeline error types.

/// Specific error conditions for chapter generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ChapterErrorKind {
    /// Scene-splitting generator failed to produce a usable scene list
    #[display("Scene splitting failed: {}", _0)]
    SceneSplit(String),
    /// Per-scene prose generation failed
    #[display("Prose generation failed for scene {}: {}", scene, message)]
    ProseGeneration {
        /// 1-based scene position within the chapter (post-deduplication)
        scene: usize,
        /// Error message
        message: String,
    },
    /// Provider response did not contain parseable structured output
    #[display("Malformed provider response: {}", _0)]
    MalformedResponse(String),
}

/// Error type for chapter pipeline operations.
///
/// # Examples
///
/// ```
/// use fabula_error::{ChapterError, ChapterErrorKind};
///
/// let err = ChapterError::new(ChapterErrorKind::SceneSplit("no scenes".into()));
/// assert!(format!("{}", err).contains("Scene splitting failed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Chapter Error: {} at line {} in {}", kind, line, file)]
pub struct ChapterError {
    /// The specific error condition
    pub kind: ChapterErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ChapterError {
    /// Create a new ChapterError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ChapterErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
