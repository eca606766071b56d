// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Notification sink abstraction
//!
//! Every component reports status and diagnostics through an injected
//! [`NotificationSink`] instead of printing directly, so the same pipeline can
//! drive a console, a UI log, or a test capture buffer.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Receiver for human-readable pipeline output.
///
/// `line` carries status and diagnostic messages. `fragment` carries streamed
/// answer chunks and defaults to `line` for sinks that have no notion of
/// partial output.
pub trait NotificationSink: Send + Sync {
    fn line(&self, message: &str);

    fn fragment(&self, chunk: &str) {
        self.line(chunk);
    }
}

/// Console sink used by the binary
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn line(&self, message: &str) {
        println!("{}", message);
    }

    fn fragment(&self, chunk: &str) {
        print!("{}", chunk);
        // Streamed chunks arrive without newlines, flush so they show up live
        let _ = std::io::stdout().flush();
    }
}

/// Capturing sink for tests and embedding hosts
#[derive(Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
    streamed: Arc<Mutex<String>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received through `line`, in arrival order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Concatenation of all streamed fragments
    pub fn streamed(&self) -> String {
        self.streamed.lock().unwrap().clone()
    }

    /// True if any captured line contains `needle`
    pub fn contains_line(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .any(|line| line.contains(needle))
    }
}

impl NotificationSink for CaptureSink {
    fn line(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn fragment(&self, chunk: &str) {
        self.streamed.lock().unwrap().push_str(chunk);
    }
}
