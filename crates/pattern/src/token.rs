// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Template tokenizer.
//!
//! A four-state lexer splits a template into literal runs, separators, and
//! placeholders:
//!
//! - `Data`: accumulate literal text, split on separators
//! - `VariableOpen`: inside `{...`, waiting for `?` or `}`
//! - `VariableOptionalCheck`: saw `?`, only `}` keeps it a placeholder
//! - `Eof`: flush the pending literal, or fail on an open placeholder

use crate::error::{PatternError, Result};
use crate::options::Options;

/// A lexical unit of a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Literal text between separators and placeholders.
    Literal(String),
    /// The configured separator character.
    Separator,
    /// A named placeholder, `{name}` or `{name?}`.
    Variable { name: String, optional: bool },
}

impl Token {
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }

    /// Placeholder name, if this is a variable.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Self::Variable { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Data,
    VariableOpen,
    VariableOptionalCheck,
    Eof,
}

/// Split `pattern` into tokens using the markers from `options`.
pub fn tokenize(pattern: &str, options: &Options) -> Result<Vec<Token>> {
    let chars: Vec<(usize, char)> = pattern.char_indices().collect();
    let mut tokens = Vec::new();
    let mut state = State::Data;
    // Byte offset where the pending literal run (or open placeholder) starts.
    let mut mark = 0;
    let mut i = 0;

    loop {
        let current = chars.get(i).copied();

        match (state, current) {
            (State::Eof, _) => {
                flush_literal(&mut tokens, &pattern[mark..]);
                break;
            }
            (State::Data, None) => state = State::Eof,
            (State::Data, Some((pos, c))) => {
                if c == options.separator {
                    flush_literal(&mut tokens, &pattern[mark..pos]);
                    tokens.push(Token::Separator);
                    mark = pos + c.len_utf8();
                } else if c == options.start_marker {
                    flush_literal(&mut tokens, &pattern[mark..pos]);
                    mark = pos;
                    state = State::VariableOpen;
                }
                i += 1;
            }
            (State::VariableOpen | State::VariableOptionalCheck, None) => {
                return Err(PatternError::Unterminated { position: mark });
            }
            (State::VariableOpen, Some((pos, c))) => {
                if c == options.optional_marker {
                    state = State::VariableOptionalCheck;
                } else if c == options.end_marker {
                    let start = mark + options.start_marker.len_utf8();
                    tokens.push(variable(&pattern[start..pos], mark, false)?);
                    mark = pos + c.len_utf8();
                    state = State::Data;
                }
                i += 1;
            }
            (State::VariableOptionalCheck, Some((pos, c))) => {
                if c == options.end_marker {
                    let start = mark + options.start_marker.len_utf8();
                    let end = pos - options.optional_marker.len_utf8();
                    tokens.push(variable(&pattern[start..end], mark, true)?);
                    mark = pos + c.len_utf8();
                    i += 1;
                }
                // Anything else: the placeholder was literal text all along.
                // Re-scan this character as data without advancing.
                state = State::Data;
            }
        }
    }

    Ok(tokens)
}

fn flush_literal(tokens: &mut Vec<Token>, text: &str) {
    if text.is_empty() {
        return;
    }
    // A swallowed placeholder leaves two runs back to back; keep them as one.
    if let Some(Token::Literal(prev)) = tokens.last_mut() {
        prev.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_string()));
    }
}

fn variable(name: &str, position: usize, optional: bool) -> Result<Token> {
    if !is_valid_name(name) {
        return Err(PatternError::InvalidName { name: name.to_string(), position });
    }
    Ok(Token::Variable { name: name.to_string(), optional })
}

/// Placeholder names follow `[A-Za-z][A-Za-z0-9_]*`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Distinct variable names in first-occurrence order.
pub fn variable_names(tokens: &[Token]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in tokens.iter().filter_map(Token::variable_name) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
