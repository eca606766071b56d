// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Model family classification
//!
//! The family decides which embedding column of the store a session reads and
//! writes. It is derived from the leading token of a model identifier, so
//! `mistral-7b-instruct-v0.2.Q4_K_M` and `Mistral-7B-code-ft` land in the same
//! column while an unrecognized prefix stays clearly separated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported generative model families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    Llama,
    Mistral,
    Mixtral,
    Phi,
    /// Identifier did not match any known family
    Unsupported,
}

impl ModelFamily {
    /// Families that can carry embeddings
    pub const SUPPORTED: [ModelFamily; 4] = [
        ModelFamily::Llama,
        ModelFamily::Mistral,
        ModelFamily::Mixtral,
        ModelFamily::Phi,
    ];

    /// Derive the family from a model identifier.
    ///
    /// Classification uses the token before the first separator,
    /// case-insensitive. CodeLlama models count as Llama.
    pub fn from_identifier(identifier: &str) -> Self {
        let prefix = identifier
            .split(['-', '_', '.', ' '])
            .next()
            .unwrap_or("")
            .to_lowercase();

        match prefix.as_str() {
            "llama" | "llama2" | "llama3" | "codellama" => Self::Llama,
            "mistral" => Self::Mistral,
            "mixtral" => Self::Mixtral,
            "phi" | "phi2" | "phi3" => Self::Phi,
            _ => Self::Unsupported,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Llama => "llama",
            Self::Mistral => "mistral",
            Self::Mixtral => "mixtral",
            Self::Phi => "phi",
            Self::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
