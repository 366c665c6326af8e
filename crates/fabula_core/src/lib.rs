//! Core data types for the Fabula chapter pipeline.
//!
//! This crate defines the canonical scene-outline record, the tagged variants
//! used when ingesting cached expanded outlines, and the text generation
//! request types shared by LLM driver implementations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod outline;
mod request;
mod role;
mod scene;

pub use message::{Message, MessageBuilder};
pub use outline::SceneSource;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse,
};
pub use role::Role;
pub use scene::{SceneRecord, SceneRecordBuilder, SceneRecordBuilderError};
