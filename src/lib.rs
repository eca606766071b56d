// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod backend;
pub mod config;
pub mod corpus;
pub mod errors;
pub mod input;
pub mod model;
pub mod notify;
pub mod rag;
pub mod session;

// Re-export main types
pub use backend::{ChatOptions, InferenceBackend, LocalBackend, TokenStream};
pub use config::RagConfig;
pub use corpus::{Corpus, DEFAULT_FACTS};
pub use errors::RagError;
pub use input::{ConsoleInput, InputSource, ScriptedInput};
pub use model::{ModelFamily, ModelSelector, SelectedModel, SelectorState};
pub use notify::{CaptureSink, ConsoleSink, NotificationSink};
pub use rag::{cosine_similarity, top_k, EmbeddingStore, Fact, PromptComposer, ScoredMatch};
pub use session::{ChatSessionController, SessionState};
