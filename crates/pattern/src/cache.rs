// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-builder memo tables.
//!
//! Both caches live inside one [`Builder`](crate::Builder) and die with it, so
//! builders with different options never see each other's entries.

use std::sync::Arc;

use dashmap::DashMap;
use regex::Regex;

use crate::error::Result;
use crate::options::Options;
use crate::token::{Token, tokenize};

/// Token sequences keyed by raw pattern string.
#[derive(Debug, Default)]
pub struct TokenCache {
    entries: DashMap<String, Arc<[Token]>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens for `pattern`, lexing on first use.
    ///
    /// A failed lex leaves no entry. When two callers race on the same pattern
    /// the first insert wins and both get the same `Arc`.
    pub fn get_or_tokenize(&self, pattern: &str, options: &Options) -> Result<Arc<[Token]>> {
        if let Some(tokens) = self.entries.get(pattern) {
            tracing::trace!("token cache hit: {:?}", pattern);
            return Ok(Arc::clone(&tokens));
        }

        // Lex outside the shard lock.
        let tokens: Arc<[Token]> = tokenize(pattern, options)?.into();
        tracing::debug!("tokenized {:?} into {} tokens", pattern, tokens.len());

        let entry = self.entries.entry(pattern.to_string()).or_insert(tokens);
        Ok(Arc::clone(&entry))
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.contains_key(pattern)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compiled regexes keyed by regex source.
///
/// Every distinct source stays until [`RegexCache::clear`]; there is no eviction.
#[derive(Debug, Default)]
pub struct RegexCache {
    entries: DashMap<String, Regex>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiled form of `source`. Malformed sources are never cached.
    pub fn get_or_compile(&self, source: &str) -> Result<Regex> {
        if let Some(regex) = self.entries.get(source) {
            return Ok(Regex::clone(&regex));
        }

        let regex = Regex::new(source)?;
        tracing::debug!("compiled regex {:?}", source);
        let entry = self.entries.entry(source.to_string()).or_insert(regex);
        Ok(Regex::clone(&entry))
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
