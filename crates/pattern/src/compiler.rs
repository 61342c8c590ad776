// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Token sequence to regex source.
//!
//! Each placeholder becomes `(?P<name>(?:expr))`. The inner non-capturing group
//! keeps alternation in an override from leaking into the surrounding pattern.
//! How a placeholder's neighbouring separator is emitted is decided by
//! [`Shape::select`].

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::options::{CaptureOrientation, Options};
use crate::token::Token;

/// Per-call regex fragments keyed by placeholder name.
pub type Overrides = HashMap<String, String>;

/// Layout of a placeholder unit relative to its adjacent separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `(?:sep(?P<name>...))?`: the preceding separator is optional with the value.
    FoldLeft,
    /// `(?:(?P<name>...)sep)?`: the following separator is optional with the value.
    FoldRight,
    /// The placeholder stands alone; separators around it are emitted as-is.
    Bare,
}

impl Shape {
    /// Decision table for placeholder emission.
    ///
    /// `neighbour_is_separator` looks at the previous token for
    /// [`CaptureOrientation::Left`] and the next token for
    /// [`CaptureOrientation::Right`]. `segment` means the placeholder is bounded
    /// by separators or pattern edges on both sides.
    pub fn select(
        capture: CaptureOrientation,
        optional: bool,
        neighbour_is_separator: bool,
        segment: bool,
    ) -> Self {
        use CaptureOrientation::{Left, Right};

        match (capture, optional, neighbour_is_separator, segment) {
            (Left, true, true, true) => Self::FoldLeft,
            // `pre-/{b?}-suf`: the separator is required even when `b` is empty
            (Left, true, true, false) => Self::Bare,
            (Left, true, false, _) => Self::Bare,
            (Left, false, _, _) => Self::Bare,

            (Right, true, true, true) => Self::FoldRight,
            (Right, true, true, false) => Self::Bare,
            (Right, true, false, _) => Self::Bare,
            (Right, false, _, _) => Self::Bare,
        }
    }
}

/// Emit anchored regex source for `tokens`.
pub fn compile(tokens: &[Token], overrides: &Overrides, options: &Options) -> String {
    let sep = options.escaped_separator();
    let default_expr = options.placeholder_expression();
    let shapes = shapes(tokens, options.capture);
    let last = tokens.len().checked_sub(1);

    let mut out = String::new();
    if !options.flags.is_empty() {
        let _ = write!(out, "(?{})", options.flags);
    }
    out.push('^');

    let mut bound: Vec<&str> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Literal(text) => out.push_str(&regex::escape(text)),
            Token::Separator => {
                let folded = match options.capture {
                    CaptureOrientation::Left => shapes.get(i + 1) == Some(&Some(Shape::FoldLeft)),
                    CaptureOrientation::Right => {
                        i > 0 && shapes.get(i - 1) == Some(&Some(Shape::FoldRight))
                    }
                };
                if folded {
                    continue;
                }
                out.push_str(&sep);
                if Some(i) == last && options.allow_trailing_separator {
                    out.push('?');
                }
            }
            Token::Variable { name, optional } => {
                let expr = overrides.get(name).map_or(&*default_expr, String::as_str);
                // Group names must be unique; later occurrences only constrain.
                let group = if bound.contains(&name.as_str()) {
                    format!("(?:{expr})")
                } else {
                    bound.push(name);
                    format!("(?P<{name}>(?:{expr}))")
                };

                match shapes.get(i).copied().flatten() {
                    Some(Shape::FoldLeft) => {
                        let _ = write!(out, "(?:{sep}{group})");
                    }
                    Some(Shape::FoldRight) => {
                        let _ = write!(out, "(?:{group}{sep})");
                    }
                    Some(Shape::Bare) | None => out.push_str(&group),
                }
                if *optional {
                    out.push('?');
                }
            }
        }
    }

    if options.allow_trailing_separator && !tokens.last().is_some_and(Token::is_separator) {
        out.push_str(&sep);
        out.push('?');
    }

    out.push('$');
    out
}

/// Shape of every variable token, `None` for the rest.
fn shapes(tokens: &[Token], capture: CaptureOrientation) -> Vec<Option<Shape>> {
    let is_separator =
        |i: Option<usize>| i.and_then(|i| tokens.get(i)).is_some_and(Token::is_separator);
    let is_boundary = |i: Option<usize>| match i.and_then(|i| tokens.get(i)) {
        None => true,
        Some(token) => token.is_separator(),
    };

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let Token::Variable { optional, .. } = token else {
                return None;
            };
            let prev = i.checked_sub(1);
            let next = Some(i + 1);
            let segment = is_boundary(prev) && is_boundary(next);
            let neighbour = match capture {
                CaptureOrientation::Left => prev,
                CaptureOrientation::Right => next,
            };
            Some(Shape::select(capture, *optional, is_separator(neighbour), segment))
        })
        .collect()
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
