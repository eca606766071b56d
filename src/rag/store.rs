// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Family-tagged embedding store
//!
//! Each corpus fact carries at most one embedding per model family. A fact
//! with no embedding for the active family is invisible to ranking, it is
//! excluded from the candidate set rather than scored as zero.

use std::collections::HashMap;

use crate::errors::RagError;
use crate::model::ModelFamily;

/// A corpus fact and its per-family embeddings
#[derive(Debug, Clone)]
pub struct Fact {
    text: String,
    embeddings: HashMap<ModelFamily, Vec<f32>>,
}

impl Fact {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            embeddings: HashMap::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn embedding_for(&self, family: ModelFamily) -> Option<&[f32]> {
        self.embeddings.get(&family).map(Vec::as_slice)
    }
}

/// In-memory vector table over a fixed corpus, one column per model family
#[derive(Debug, Default)]
pub struct EmbeddingStore {
    facts: Vec<Fact>,
}

impl EmbeddingStore {
    /// Build a store over the given fact texts, preserving their order
    pub fn new<I, S>(fact_texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            facts: fact_texts.into_iter().map(Fact::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Record one embedding for the fact at `index` under `family`.
    ///
    /// Fails with `UnsupportedFamily` for the unsupported tag, the embedding
    /// is discarded while the fact text stays in the store for traceability.
    /// Re-inserting under the same family replaces the previous embedding.
    ///
    /// # Panics
    /// Panics if `index` is out of range, the store is always populated from
    /// the corpus the caller iterates over.
    pub fn put(
        &mut self,
        index: usize,
        family: ModelFamily,
        vector: Vec<f32>,
    ) -> Result<(), RagError> {
        if !family.is_supported() {
            return Err(RagError::UnsupportedFamily(family.to_string()));
        }
        self.facts[index].embeddings.insert(family, vector);
        Ok(())
    }

    /// Embedded facts for one family as `(vector, text)` pairs in corpus order
    pub fn vectors_for(&self, family: ModelFamily) -> Vec<(&[f32], &str)> {
        self.facts
            .iter()
            .filter_map(|fact| {
                fact.embedding_for(family)
                    .map(|vector| (vector, fact.text()))
            })
            .collect()
    }
}
