// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Runtime configuration
//!
//! CLI flags with environment-variable fallbacks, every knob also works from
//! a `.env` file loaded by the binary.

use clap::Parser;
use std::path::PathBuf;

use crate::backend::ChatOptions;

/// Console RAG pipeline over a family-tagged embedding store
#[derive(Debug, Clone, Parser)]
#[command(name = "fabstir-rag-chat", version)]
pub struct RagConfig {
    /// Directory scanned for GGUF model files
    #[arg(long, env = "MODELS_DIR", default_value = "./models")]
    pub models_dir: PathBuf,

    /// JSON file holding an array of fact strings, built-in facts when unset
    #[arg(long, env = "FACTS_PATH")]
    pub facts: Option<PathBuf>,

    /// Number of top-ranked facts included in each grounded prompt
    #[arg(long, env = "TOP_K", default_value_t = 3)]
    pub top_k: usize,

    /// Sampling temperature forwarded to the generation backend
    #[arg(long, env = "TEMPERATURE", default_value_t = 0.25)]
    pub temperature: f32,

    /// Maximum fragments generated per answer
    #[arg(long, env = "MAX_TOKENS", default_value_t = 256)]
    pub max_tokens: usize,

    /// Embedding dimension used by the local backend
    #[arg(long, env = "EMBEDDING_DIM", default_value_t = 384)]
    pub embedding_dim: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("./models"),
            facts: None,
            top_k: 3,
            temperature: 0.25,
            max_tokens: 256,
            embedding_dim: 384,
        }
    }
}

impl RagConfig {
    /// Generation options derived from this configuration
    pub fn chat_options(&self) -> ChatOptions {
        ChatOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            anti_prompts: Vec::new(),
        }
    }
}
