// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod controller;

pub use controller::{ChatSessionController, SessionState, QUERY_PROMPT};
