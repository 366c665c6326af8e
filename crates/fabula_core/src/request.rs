//! Request and response types for text generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A text generation request.
///
/// # Examples
///
/// ```
/// use fabula_core::{GenerateRequest, MessageBuilder, Role};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![MessageBuilder::default()
///         .role(Role::User)
///         .content("Write the opening scene.")
///         .build()
///         .unwrap()])
///     .temperature(Some(0.7))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    temperature: Option<f32>,
    /// Model identifier to use
    model: Option<String>,
}

impl GenerateRequest {
    /// Create a builder for a new request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use fabula_core::GenerateResponse;
///
/// let response = GenerateResponse::new("The harbor was quiet at dawn.");
/// assert!(response.text().contains("harbor"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// The generated text from the model
    text: String,
}

impl GenerateResponse {
    /// Create a response from generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
