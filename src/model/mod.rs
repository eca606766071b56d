// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod family;
pub mod selector;

pub use family::ModelFamily;
pub use selector::{ModelCandidate, ModelSelector, SelectedModel, SelectorState};
