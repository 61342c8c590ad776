// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Public facade: options plus the per-instance caches.

use std::sync::Arc;

use regex::Regex;

use crate::cache::{RegexCache, TokenCache};
use crate::compiler::{self, Overrides};
use crate::error::Result;
use crate::matcher::{self, Values};
use crate::options::Options;
use crate::token::{self, Token};

/// Compiles placeholder templates and matches candidates against them.
///
/// Safe to share across threads. Options cannot change after construction;
/// build a new `Builder` for a different configuration.
///
/// [`Builder::is_match`] and [`Builder::extract_values`] cache every distinct
/// regex source they are given for the life of the builder, with no eviction.
/// Callers feeding unbounded ad-hoc sources should call
/// [`Builder::clear_regex_cache`] periodically.
#[derive(Debug)]
pub struct Builder {
    options: Options,
    tokens: TokenCache,
    regexes: RegexCache,
}

impl Default for Builder {
    fn default() -> Self {
        Self::with_valid_options(Options::default())
    }
}

impl Builder {
    /// Create a builder after validating `options`.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self::with_valid_options(options))
    }

    fn with_valid_options(options: Options) -> Self {
        Self { options, tokens: TokenCache::new(), regexes: RegexCache::new() }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Cached token sequence for `pattern`.
    pub fn tokens(&self, pattern: &str) -> Result<Arc<[Token]>> {
        self.tokens.get_or_tokenize(pattern, &self.options)
    }

    /// Regex source for `pattern`, using `overrides` where given.
    pub fn compile(&self, pattern: &str, overrides: &Overrides) -> Result<String> {
        let tokens = self.tokens(pattern)?;
        let source = compiler::compile(&tokens, overrides, &self.options);
        tracing::debug!("compiled {:?} to {:?}", pattern, source);
        Ok(source)
    }

    /// Like [`compile`](Self::compile), also building the regex and name list.
    pub fn compile_pattern(&self, pattern: &str, overrides: &Overrides) -> Result<CompiledPattern> {
        let tokens = self.tokens(pattern)?;
        let source = compiler::compile(&tokens, overrides, &self.options);
        let regex = self.regexes.get_or_compile(&source)?;
        Ok(CompiledPattern { regex, names: token::variable_names(&tokens) })
    }

    /// Distinct placeholder names in first-occurrence order.
    pub fn names_of(&self, pattern: &str) -> Result<Vec<String>> {
        Ok(token::variable_names(&self.tokens(pattern)?))
    }

    /// Whether `candidate` matches `regex_source`.
    ///
    /// Only a malformed `regex_source` is an error. A well-formed source is
    /// cached until [`Builder::clear_regex_cache`].
    pub fn is_match(&self, regex_source: &str, candidate: &str) -> Result<bool> {
        let regex = self.regexes.get_or_compile(regex_source)?;
        Ok(matcher::is_match(&regex, candidate))
    }

    /// Placeholder values bound by `candidate`, empty when it does not match.
    ///
    /// Only a malformed `regex_source` is an error. A well-formed source is
    /// cached until [`Builder::clear_regex_cache`].
    pub fn extract_values(&self, regex_source: &str, candidate: &str) -> Result<Values> {
        let regex = self.regexes.get_or_compile(regex_source)?;
        Ok(matcher::extract_values(&regex, candidate))
    }

    /// Drop every regex cached by [`Builder::is_match`] and
    /// [`Builder::extract_values`]. Template tokens stay cached.
    pub fn clear_regex_cache(&self) {
        self.regexes.clear();
    }
}

/// A compiled template: regex plus its placeholder names.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    names: Vec<String>,
}

impl CompiledPattern {
    /// Regex source, identical to [`Builder::compile`] output.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Distinct placeholder names in first-occurrence order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        matcher::is_match(&self.regex, candidate)
    }

    pub fn values(&self, candidate: &str) -> Values {
        matcher::extract_values(&self.regex, candidate)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
