// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Builder configuration.
//!
//! Options are fixed once handed to a [`Builder`](crate::Builder). Changing any
//! knob means constructing a new builder, which starts with empty caches.

use std::borrow::Cow;

use serde::Deserialize;

use crate::error::{PatternError, Result};

/// Inline flags accepted by the `regex` crate that make sense for a whole pattern.
const ALLOWED_FLAGS: &[char] = &['i', 'm', 's', 'u', 'U'];

/// Which neighbour a separator is folded with around an optional placeholder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureOrientation {
    /// `a/{b?}` makes `/b` optional as a unit.
    #[default]
    Left,
    /// `{a?}/b` makes `a/` optional as a unit.
    Right,
}

/// Pattern syntax and compilation policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Opens a placeholder (default `{`).
    pub start_marker: char,

    /// Closes a placeholder (default `}`).
    pub end_marker: char,

    /// Segment separator (default `/`).
    pub separator: char,

    /// Marks a placeholder optional when it directly precedes the end marker
    /// (default `?`).
    pub optional_marker: char,

    /// Separator folding direction for optional placeholders.
    pub capture: CaptureOrientation,

    /// Accept one trailing separator the pattern does not spell out.
    pub allow_trailing_separator: bool,

    /// Regex fragment used for placeholders without an override.
    ///
    /// `None` means "one or more characters other than the separator".
    pub default_expression: Option<String>,

    /// Inline regex flags, emitted as a `(?flags)` prefix when non-empty.
    pub flags: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            start_marker: '{',
            end_marker: '}',
            separator: '/',
            optional_marker: '?',
            capture: CaptureOrientation::Left,
            allow_trailing_separator: true,
            default_expression: None,
            flags: String::new(),
        }
    }
}

impl Options {
    /// Parse options from a TOML document. Missing keys take their defaults.
    ///
    /// ```toml
    /// separator = "."
    /// capture = "right"
    /// allow_trailing_separator = false
    /// ```
    pub fn from_toml(content: &str) -> Result<Self> {
        let options: Self = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_markers(mut self, start: char, end: char) -> Self {
        self.start_marker = start;
        self.end_marker = end;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_optional_marker(mut self, marker: char) -> Self {
        self.optional_marker = marker;
        self
    }

    pub fn with_capture(mut self, capture: CaptureOrientation) -> Self {
        self.capture = capture;
        self
    }

    pub fn with_trailing_separator(mut self, allow: bool) -> Self {
        self.allow_trailing_separator = allow;
        self
    }

    pub fn with_default_expression(mut self, expression: impl Into<String>) -> Self {
        self.default_expression = Some(expression.into());
        self
    }

    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = flags.into();
        self
    }

    /// Check that the markers are pairwise distinct and each flag is known and given once.
    pub fn validate(&self) -> Result<()> {
        let markers = [
            ("start_marker", self.start_marker),
            ("end_marker", self.end_marker),
            ("separator", self.separator),
            ("optional_marker", self.optional_marker),
        ];
        for (i, (name, c)) in markers.iter().enumerate() {
            if let Some((other, _)) = markers[i + 1..].iter().find(|(_, o)| o == c) {
                return Err(PatternError::InvalidOptions(format!(
                    "{name} and {other} are both {c:?}"
                )));
            }
        }

        for (i, flag) in self.flags.char_indices() {
            if !ALLOWED_FLAGS.contains(&flag) {
                let message = format!("unsupported regex flag {flag:?}");
                return Err(PatternError::InvalidOptions(message));
            }
            if self.flags[..i].contains(flag) {
                let message = format!("duplicate regex flag {flag:?}");
                return Err(PatternError::InvalidOptions(message));
            }
        }

        Ok(())
    }

    /// The regex fragment substituted for placeholders without an override.
    pub fn placeholder_expression(&self) -> Cow<'_, str> {
        match &self.default_expression {
            Some(expr) => Cow::Borrowed(expr.as_str()),
            None => Cow::Owned(format!("[^{}]+", self.escaped_separator())),
        }
    }

    /// The separator escaped for use in regex source.
    pub fn escaped_separator(&self) -> String {
        regex::escape(self.separator.encode_utf8(&mut [0; 4]))
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
