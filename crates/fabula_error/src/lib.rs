//! Error types for the Fabula chapter pipeline.
//!
//! This crate provides the foundation error types used throughout the Fabula workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fabula_error::{FabulaResult, BackendError};
//!
//! fn call_provider() -> FabulaResult<String> {
//!     Err(BackendError::new("Connection refused"))?
//! }
//!
//! match call_provider() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod builder;
mod chapter;
mod error;
mod json;

pub use backend::BackendError;
pub use builder::{BuilderError, BuilderErrorKind};
pub use chapter::{ChapterError, ChapterErrorKind};
pub use error::{FabulaError, FabulaErrorKind, FabulaResult};
pub use json::JsonError;
