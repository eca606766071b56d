// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Error types for the RAG console pipeline
//!
//! The taxonomy separates fatal initialization failures (missing model
//! directory, empty candidate list, unusable backend) from per-turn failures
//! that only abort the current query.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the retrieval pipeline and its session loop
#[derive(Error, Debug)]
pub enum RagError {
    /// Models directory does not exist on disk
    #[error("Models directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    /// Directory exists but holds no GGUF candidates
    #[error("No models found in directory: {0}")]
    NoModelsFound(PathBuf),

    /// User entered something that is not a valid 1-based candidate index
    #[error("Invalid model selection: {0:?}")]
    InvalidSelection(String),

    /// Model identifier maps to no known family, embedding was discarded
    #[error("Unsupported model family: {0}")]
    UnsupportedFamily(String),

    /// Backend failed to produce an embedding
    #[error("Embedding failed: {0}")]
    Embedding(String),

    /// Backend failed during token generation
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Backend could not be constructed at startup
    #[error("Inference backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Input source closed before a model was selected
    #[error("Input closed before a model was selected")]
    InputClosed,

    /// Facts file was unreadable or malformed
    #[error("Failed to load facts from {path}: {reason}")]
    CorpusLoad { path: String, reason: String },

    /// Generic I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RagError {
    /// Get user-friendly message for the console sink
    pub fn user_message(&self) -> String {
        match self {
            RagError::DirectoryNotFound(_) => "The directory does not exist.".to_string(),
            RagError::NoModelsFound(_) => "No models found in the directory".to_string(),
            RagError::InvalidSelection(_) => {
                "Invalid input, please enter a number corresponding to the model list.".to_string()
            }
            RagError::UnsupportedFamily(family) => {
                format!("Unsupported model type: {}", family)
            }
            RagError::Embedding(_) => {
                "Failed to embed the query, please try again.".to_string()
            }
            RagError::Generation(_) => {
                "Generation failed, please try again.".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Get error code for logging and metrics
    pub fn error_code(&self) -> &'static str {
        match self {
            RagError::DirectoryNotFound(_) => "DIRECTORY_NOT_FOUND",
            RagError::NoModelsFound(_) => "NO_MODELS_FOUND",
            RagError::InvalidSelection(_) => "INVALID_SELECTION",
            RagError::UnsupportedFamily(_) => "UNSUPPORTED_FAMILY",
            RagError::Embedding(_) => "EMBEDDING_FAILED",
            RagError::Generation(_) => "GENERATION_FAILED",
            RagError::BackendUnavailable(_) => "BACKEND_UNAVAILABLE",
            RagError::InputClosed => "INPUT_CLOSED",
            RagError::CorpusLoad { .. } => "CORPUS_LOAD_FAILED",
            RagError::IoError(_) => "IO_ERROR",
        }
    }

    /// Check whether this error aborts the process rather than the current turn
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RagError::DirectoryNotFound(_)
                | RagError::NoModelsFound(_)
                | RagError::BackendUnavailable(_)
                | RagError::InputClosed
                | RagError::CorpusLoad { .. }
                | RagError::IoError(_)
        )
    }
}
