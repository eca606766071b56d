// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Inference backend seam
//!
//! The pipeline needs exactly two capabilities from an engine: embed a text
//! and stream a chat completion. Everything behind that, weight loading,
//! tokenization, sampling, belongs to the backend implementation. The shipped
//! [`LocalBackend`] is deterministic and runs without model weights, a real
//! llama.cpp engine plugs in behind the same trait.

pub mod local;

pub use local::LocalBackend;

use async_trait::async_trait;
use tokio_stream::wrappers::ReceiverStream;

use crate::errors::RagError;

/// Lazily produced, finite, non-restartable sequence of answer fragments
pub type TokenStream = ReceiverStream<Result<String, RagError>>;

/// Sampling options for one generation call
#[derive(Debug, Clone)]
pub struct ChatOptions {
    pub temperature: f32,
    pub max_tokens: usize,
    /// Stop sequences, generation ends before any of these would be emitted
    pub anti_prompts: Vec<String>,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            temperature: 0.25,
            max_tokens: 256,
            anti_prompts: Vec::new(),
        }
    }
}

/// Embedding and chat generation capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Embed one text into a vector
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RagError>;

    /// Start a streamed completion for the given prompt
    async fn stream_chat(
        &self,
        prompt: &str,
        options: &ChatOptions,
    ) -> Result<TokenStream, RagError>;
}
