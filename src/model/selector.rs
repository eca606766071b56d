// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Interactive model selection
//!
//! Scans a directory for GGUF files and drives the numbered selection loop.
//! Missing directories and empty candidate lists are fatal; bad user input is
//! retried without surfacing an error to the caller.

use std::path::PathBuf;

use crate::errors::RagError;
use crate::input::InputSource;
use crate::model::family::ModelFamily;
use crate::notify::NotificationSink;

/// Selection lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    Scanning,
    AwaitingChoice,
    Resolved,
    Failed,
}

/// One model file discovered in the models directory
#[derive(Debug, Clone)]
pub struct ModelCandidate {
    pub path: PathBuf,
    /// File stem, also the identifier the family is derived from
    pub name: String,
}

/// Outcome of a successful selection
#[derive(Debug, Clone)]
pub struct SelectedModel {
    pub path: PathBuf,
    pub name: String,
    pub family: ModelFamily,
}

pub struct ModelSelector {
    models_directory: PathBuf,
    candidates: Vec<ModelCandidate>,
    state: SelectorState,
}

impl ModelSelector {
    pub fn new(models_directory: impl Into<PathBuf>) -> Self {
        Self {
            models_directory: models_directory.into(),
            candidates: Vec::new(),
            state: SelectorState::Scanning,
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn candidates(&self) -> &[ModelCandidate] {
        &self.candidates
    }

    /// Scan the models directory for GGUF files.
    ///
    /// Candidates are sorted by name so the numbered listing is stable across
    /// runs regardless of directory iteration order.
    pub async fn scan(&mut self) -> Result<(), RagError> {
        if !self.models_directory.is_dir() {
            self.state = SelectorState::Failed;
            return Err(RagError::DirectoryNotFound(self.models_directory.clone()));
        }

        let mut candidates = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.models_directory).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();

            // Check if it's a GGUF file
            if path.extension().and_then(|e| e.to_str()) == Some("gguf") {
                let name = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("unknown")
                    .to_string();
                candidates.push(ModelCandidate { path, name });
            }
        }
        candidates.sort_by(|a, b| a.name.cmp(&b.name));

        if candidates.is_empty() {
            self.state = SelectorState::Failed;
            return Err(RagError::NoModelsFound(self.models_directory.clone()));
        }

        tracing::info!(
            count = candidates.len(),
            directory = %self.models_directory.display(),
            "model candidates discovered"
        );
        self.candidates = candidates;
        self.state = SelectorState::AwaitingChoice;
        Ok(())
    }

    /// Run the numbered selection loop until the user picks a valid candidate.
    ///
    /// Out-of-range and non-numeric input re-presents the list with a retry
    /// diagnostic. Only a closed input source ends the loop with an error.
    pub async fn choose(
        &mut self,
        input: &mut dyn InputSource,
        sink: &dyn NotificationSink,
    ) -> Result<SelectedModel, RagError> {
        debug_assert_eq!(self.state, SelectorState::AwaitingChoice);

        loop {
            for (i, candidate) in self.candidates.iter().enumerate() {
                sink.line(&format!("{}: {}", i + 1, candidate.name));
            }
            sink.line("\nEnter the number of the model you want to load:");

            let Some(raw) = input.read_line().await? else {
                self.state = SelectorState::Failed;
                return Err(RagError::InputClosed);
            };

            match raw.trim().parse::<usize>() {
                Ok(index) if (1..=self.candidates.len()).contains(&index) => {
                    let candidate = &self.candidates[index - 1];
                    let family = ModelFamily::from_identifier(&candidate.name);
                    sink.line(&format!("Model selected: {}", candidate.name));
                    tracing::info!(model = %candidate.name, family = %family, "model resolved");
                    self.state = SelectorState::Resolved;
                    return Ok(SelectedModel {
                        path: candidate.path.clone(),
                        name: candidate.name.clone(),
                        family,
                    });
                }
                _ => {
                    let rejected = RagError::InvalidSelection(raw);
                    tracing::warn!(error_code = rejected.error_code(), "selection retried");
                    sink.line(&rejected.user_message());
                }
            }
        }
    }
}
