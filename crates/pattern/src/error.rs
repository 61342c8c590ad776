// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for pattern tokenization, compilation, and matching.

use thiserror::Error;

/// Errors produced while building or applying a pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A placeholder name does not match `[A-Za-z][A-Za-z0-9_]*`.
    #[error("invalid placeholder name {name:?} at offset {position}")]
    InvalidName { name: String, position: usize },

    /// A start marker was never closed before end of input.
    #[error("unterminated placeholder starting at offset {position}")]
    Unterminated { position: usize },

    /// The regex source handed to the matcher could not be compiled.
    #[error("invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Options failed validation (marker collision, unknown flag).
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Options could not be parsed from TOML.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}

impl PatternError {
    /// Whether this error comes from the template syntax itself.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::InvalidName { .. } | Self::Unterminated { .. })
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
