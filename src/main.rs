// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use fabstir_rag_chat::{
    ChatSessionController, ConsoleInput, ConsoleSink, Corpus, LocalBackend, ModelSelector,
    NotificationSink, RagConfig,
};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = RagConfig::parse();
    let sink = ConsoleSink;
    let mut input = ConsoleInput::new();

    let corpus = match &config.facts {
        Some(path) => match Corpus::from_json_file(path).await {
            Ok(corpus) => corpus,
            Err(err) => {
                sink.line(&err.user_message());
                std::process::exit(1);
            }
        },
        None => Corpus::builtin(),
    };
    tracing::info!(facts = corpus.len(), "corpus ready");

    let mut selector = ModelSelector::new(&config.models_dir);
    if let Err(err) = selector.scan().await {
        sink.line(&err.user_message());
        std::process::exit(1);
    }

    let selected = match selector.choose(&mut input, &sink).await {
        Ok(selected) => selected,
        Err(err) => {
            sink.line(&err.user_message());
            std::process::exit(1);
        }
    };
    tracing::info!(
        path = %selected.path.display(),
        family = %selected.family,
        "backend configured"
    );
    sink.line(&format!("\nModel: {} loaded\n", selected.name));

    let backend = LocalBackend::new(config.embedding_dim);
    let mut controller = ChatSessionController::new(
        selected.family,
        corpus.into_store(),
        Box::new(backend),
        &config,
    );

    controller.embed_corpus(&sink).await?;
    controller.run(&mut input, &sink).await?;

    Ok(())
}
