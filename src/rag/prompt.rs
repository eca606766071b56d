// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Grounded prompt composition
//!
//! Builds the prompt sent to the generation backend: a fixed instruction
//! preamble, the literal query, the ranked facts as numbered lines, then the
//! `Answer:` sentinel. Pure and deterministic, identical input always yields
//! byte-identical output.

use crate::rag::ranker::ScoredMatch;

/// Instruction preamble used when none is configured
pub const DEFAULT_PREAMBLE: &str = "Reply in a conversational manner utilizing the top facts \
in the prompt to answer only the user's specific question. Be a friendly but concise chatbot \
to help users learn more about the University of Denver.";

pub struct PromptComposer {
    preamble: String,
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new(DEFAULT_PREAMBLE)
    }
}

impl PromptComposer {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
        }
    }

    /// Compose the grounded prompt for one query and its ranked matches
    pub fn compose(&self, query: &str, matches: &[ScoredMatch]) -> String {
        let mut prompt = format!("{} Query: {}\n", self.preamble, query);
        for (i, matched) in matches.iter().enumerate() {
            prompt.push_str(&format!("Fact {}: {}\n", i + 1, matched.fact_text));
        }
        prompt.push_str("Answer:");
        prompt
    }
}
