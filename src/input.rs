// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Line-oriented input sources
//!
//! Model selection and the query loop both block on "next line of input".
//! Behind this trait the binary reads stdin while tests feed scripted lines.

use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};

/// Source of user input lines
#[async_trait]
pub trait InputSource: Send {
    /// Next line without its trailing newline, `None` once the source is closed
    async fn read_line(&mut self) -> std::io::Result<Option<String>>;
}

/// Interactive stdin source used by the binary
pub struct ConsoleInput {
    reader: BufReader<Stdin>,
}

impl ConsoleInput {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InputSource for ConsoleInput {
    async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut buffer = String::new();
        let bytes_read = self.reader.read_line(&mut buffer).await?;
        if bytes_read == 0 {
            return Ok(None);
        }
        while buffer.ends_with('\n') || buffer.ends_with('\r') {
            buffer.pop();
        }
        Ok(Some(buffer))
    }
}

/// Pre-scripted input for tests, yields queued lines then reports closed
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl InputSource for ScriptedInput {
    async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
