// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat session controller
//!
//! Owns the query loop: read a query, embed it, rank the corpus, compose the
//! grounded prompt, stream the answer. One query is in flight at a time, the
//! controller suspends on input, on the embedding call, and on each streamed
//! fragment. Backend failures abort the current turn only, the loop returns
//! to reading the next query.

use futures::StreamExt;

use crate::backend::{ChatOptions, InferenceBackend};
use crate::config::RagConfig;
use crate::errors::RagError;
use crate::input::InputSource;
use crate::model::ModelFamily;
use crate::notify::NotificationSink;
use crate::rag::{top_k, EmbeddingStore, PromptComposer};

/// Prompt presented before every query, also the default stop sequence
pub const QUERY_PROMPT: &str = "Please enter a query:";

/// Controller lifecycle, `Terminated` is the only terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    ReadingQuery,
    Retrieving,
    Composing,
    Streaming,
    Terminated,
}

pub struct ChatSessionController {
    family: ModelFamily,
    store: EmbeddingStore,
    backend: Box<dyn InferenceBackend>,
    composer: PromptComposer,
    options: ChatOptions,
    top_k: usize,
    conversation: Vec<String>,
    state: SessionState,
}

impl ChatSessionController {
    pub fn new(
        family: ModelFamily,
        store: EmbeddingStore,
        backend: Box<dyn InferenceBackend>,
        config: &RagConfig,
    ) -> Self {
        let mut options = config.chat_options();
        // The model echoing the query prompt marks the end of its turn
        options.anti_prompts.push(QUERY_PROMPT.to_string());

        Self {
            family,
            store,
            backend,
            composer: PromptComposer::default(),
            options,
            top_k: config.top_k,
            conversation: Vec::new(),
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn family(&self) -> ModelFamily {
        self.family
    }

    pub fn store(&self) -> &EmbeddingStore {
        &self.store
    }

    /// Composed prompts in submission order, retained but never replayed
    pub fn conversation_log(&self) -> &[String] {
        &self.conversation
    }

    /// Embed every corpus fact under the active family.
    ///
    /// A fact whose embedding is rejected or fails stays in the store without
    /// a vector, it simply remains invisible to ranking. Both outcomes emit a
    /// diagnostic and the session carries on.
    pub async fn embed_corpus(&mut self, sink: &dyn NotificationSink) -> Result<(), RagError> {
        sink.line("Using LLM to embed facts in vector database...");

        for index in 0..self.store.len() {
            let text = self.store.facts()[index].text().to_string();
            match self.backend.embed(&text).await {
                Ok(vector) => {
                    if let Err(err) = self.store.put(index, self.family, vector) {
                        sink.line(&err.user_message());
                        tracing::warn!(
                            error_code = err.error_code(),
                            fact = %text,
                            "embedding discarded"
                        );
                    }
                }
                Err(err) => {
                    sink.line(&err.user_message());
                    tracing::warn!(
                        error_code = err.error_code(),
                        fact = %text,
                        "fact embedding failed"
                    );
                }
            }
        }

        sink.line("Facts embedded!");
        Ok(())
    }

    /// Drive the query loop until a termination input or the source closes
    pub async fn run(
        &mut self,
        input: &mut dyn InputSource,
        sink: &dyn NotificationSink,
    ) -> Result<(), RagError> {
        loop {
            self.state = SessionState::ReadingQuery;
            sink.line(&format!("\n{}", QUERY_PROMPT));

            let Some(raw) = input.read_line().await? else {
                break;
            };
            let query = raw.trim().to_string();
            if Self::is_termination(&query) {
                break;
            }

            if let Err(err) = self.run_turn(&query, sink).await {
                sink.line(&err.user_message());
                tracing::warn!(error_code = err.error_code(), "turn aborted");
            }
            self.state = SessionState::Idle;
        }

        self.state = SessionState::Terminated;
        tracing::info!(turns = self.conversation.len(), "session terminated");
        Ok(())
    }

    fn is_termination(query: &str) -> bool {
        query.is_empty()
            || query.eq_ignore_ascii_case("exit")
            || query.eq_ignore_ascii_case("quit")
    }

    async fn run_turn(
        &mut self,
        query: &str,
        sink: &dyn NotificationSink,
    ) -> Result<(), RagError> {
        self.state = SessionState::Retrieving;
        let query_embedding = self.backend.embed(query).await?;
        let matches = top_k(
            &query_embedding,
            self.store.vectors_for(self.family),
            self.top_k,
        );
        if matches.is_empty() {
            tracing::debug!(family = %self.family, "no embedded facts visible to ranking");
        }

        self.state = SessionState::Composing;
        let prompt = self.composer.compose(query, &matches);

        self.state = SessionState::Streaming;
        sink.line("\nQuerying database and processing with LLM...\n");
        let mut stream = self.backend.stream_chat(&prompt, &self.options).await?;
        while let Some(fragment) = stream.next().await {
            sink.fragment(&fragment?);
        }
        sink.line("");

        self.conversation.push(prompt);
        Ok(())
    }
}
