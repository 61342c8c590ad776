// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matching candidates and extracting placeholder values.
//!
//! A named group is bound when the match engaged it, even if it captured an
//! empty string. A group the match skipped is still bound, to `""`, when some
//! later group engaged: the match went past it, so it counts as matched empty.
//! Groups after the last engaged group are left unbound.
//!
//! With `{a?}/{b?}`, `/bbb` binds `a = ""` and `b = "bbb"`. With `{a}/{b?}`,
//! `aaa` binds only `a`.

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Placeholder values in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    entries: Vec<(String, String)>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bound names in pattern order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Values {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl IntoIterator for Values {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Values {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Whether `candidate` matches. A non-match is an ordinary `false`.
pub fn is_match(regex: &Regex, candidate: &str) -> bool {
    regex.is_match(candidate)
}

/// Named values bound by matching `candidate`; empty when it does not match.
pub fn extract_values(regex: &Regex, candidate: &str) -> Values {
    let Some(captures) = regex.captures(candidate) else {
        return Values::new();
    };

    // Group 0 is the whole match.
    let Some(last) = (1..captures.len()).rev().find(|&i| captures.get(i).is_some()) else {
        return Values::new();
    };

    regex
        .capture_names()
        .enumerate()
        .take(last + 1)
        .skip(1)
        .filter_map(|(i, name)| {
            let name = name?;
            let value = captures.get(i).map_or("", |m| m.as_str());
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
