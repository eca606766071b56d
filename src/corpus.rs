// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fact corpus
//!
//! The corpus is fixed at startup and read-only for the life of the session.
//! By default it is the built-in University of Denver fact set, a JSON file
//! with an array of strings can be loaded instead.

use std::path::Path;

use crate::errors::RagError;
use crate::rag::EmbeddingStore;

/// Built-in datasource of facts for the vector store
pub const DEFAULT_FACTS: [&str; 9] = [
    "The University of Denver is a private University that is abbreviated as 'DU'",
    "The University of Denver was founded in 1864",
    "DU is a private R1 University",
    "DU's Ritchie Center is home to the Magness Arena and Ritchie Center",
    "The mascot of the University of Denver is the Pioneer",
    "DU is located in south Denver, Colorado in the University neighborhood",
    "The 720 acre Kennedy Mountain Campus is located 110 miles northwest of Denver",
    "DU has 5700 undergraduate students and 7200 graduate students",
    "DU's hockey team plays in Magness Arena, named after cable television pioneer Bob Magness",
];

/// Ordered, immutable sequence of fact texts
#[derive(Debug, Clone)]
pub struct Corpus {
    facts: Vec<String>,
}

impl Corpus {
    /// Corpus holding the built-in fact set
    pub fn builtin() -> Self {
        Self {
            facts: DEFAULT_FACTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load a corpus from a JSON file containing an array of strings
    pub async fn from_json_file(path: &Path) -> Result<Self, RagError> {
        let corpus_load = |reason: String| RagError::CorpusLoad {
            path: path.display().to_string(),
            reason,
        };

        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| corpus_load(e.to_string()))?;
        let facts: Vec<String> =
            serde_json::from_str(&raw).map_err(|e| corpus_load(e.to_string()))?;

        if facts.is_empty() {
            return Err(corpus_load("facts file contains no entries".to_string()));
        }
        Ok(Self { facts })
    }

    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Seed an embedding store with this corpus, preserving fact order
    pub fn into_store(self) -> EmbeddingStore {
        EmbeddingStore::new(self.facts)
    }
}
