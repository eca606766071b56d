// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Deterministic local inference backend
//!
//! Stands in for a weight-backed engine so the whole pipeline runs on any
//! machine. Embeddings are hashed bag-of-words vectors, queries and facts that
//! share words land in the same buckets and rank accordingly. Generation is
//! extractive, it answers with the top-ranked fact from the grounded prompt
//! and streams the reply fragment by fragment.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::backend::{ChatOptions, InferenceBackend, TokenStream};
use crate::errors::RagError;

/// Matches the 384-dimensional sentence-transformer layout used elsewhere
pub const DEFAULT_DIMENSION: usize = 384;

pub struct LocalBackend {
    dimension: usize,
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl LocalBackend {
    pub fn new(dimension: usize) -> Self {
        assert!(dimension > 0, "embedding dimension must be nonzero");
        Self { dimension }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn tokenize(text: &str) -> Vec<String> {
        let processed: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        processed.split_whitespace().map(|s| s.to_string()).collect()
    }

    fn bucket(&self, token: &str) -> usize {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        let hash = hasher.finalize();

        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&hash[..8]);
        (u64::from_le_bytes(prefix) % self.dimension as u64) as usize
    }

    fn hashed_embedding(&self, text: &str) -> Vec<f32> {
        let mut embedding = vec![0.0f32; self.dimension];
        for token in Self::tokenize(text) {
            embedding[self.bucket(&token)] += 1.0;
        }

        let magnitude = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for value in &mut embedding {
                *value /= magnitude;
            }
        }
        embedding
    }
}

/// Pull the top-ranked fact line out of a grounded prompt
fn top_fact_of_prompt(prompt: &str) -> Option<&str> {
    prompt.lines().find_map(|line| line.strip_prefix("Fact 1: "))
}

fn compose_reply(prompt: &str) -> String {
    match top_fact_of_prompt(prompt) {
        Some(fact) => format!("Here's what I can tell you: {}", fact),
        None => "I don't have any facts matching that question.".to_string(),
    }
}

#[async_trait]
impl InferenceBackend for LocalBackend {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RagError> {
        Ok(self.hashed_embedding(text))
    }

    async fn stream_chat(
        &self,
        prompt: &str,
        options: &ChatOptions,
    ) -> Result<TokenStream, RagError> {
        tracing::debug!(
            temperature = options.temperature,
            max_tokens = options.max_tokens,
            prompt_len = prompt.len(),
            "starting local generation"
        );

        let reply = compose_reply(prompt);
        let fragments: Vec<String> = reply
            .split_whitespace()
            .enumerate()
            .map(|(i, word)| {
                if i == 0 {
                    word.to_string()
                } else {
                    format!(" {}", word)
                }
            })
            .take(options.max_tokens)
            .collect();

        let anti_prompts = options.anti_prompts.clone();
        let (tx, rx) = mpsc::channel(64);

        tokio::spawn(async move {
            let mut emitted = String::new();
            for fragment in fragments {
                emitted.push_str(&fragment);
                if anti_prompts
                    .iter()
                    .any(|stop| !stop.is_empty() && emitted.contains(stop.as_str()))
                {
                    break;
                }
                if tx.send(Ok(fragment)).await.is_err() {
                    break;
                }
                // Pace the fragments so consumers observe a live stream
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        });

        Ok(ReceiverStream::new(rx))
    }
}
