// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder path templates compiled to regular expressions.
//!
//! A template such as `{user}/{tab?}` becomes an anchored regex with one named
//! group per placeholder. The regex can then test candidates and extract the
//! bound values:
//!
//! ```
//! use placeholder_pattern::{Builder, Overrides};
//!
//! let builder = Builder::default();
//! let source = builder.compile("{user}/{tab?}", &Overrides::new())?;
//! let values = builder.extract_values(&source, "alice")?;
//! assert_eq!(values.get("user"), Some("alice"));
//! assert!(!values.contains_key("tab"));
//! # Ok::<(), placeholder_pattern::PatternError>(())
//! ```

pub mod builder;
pub mod cache;
pub mod compiler;
pub mod error;
pub mod matcher;
pub mod options;
pub mod token;

pub use builder::{Builder, CompiledPattern};
pub use compiler::{Overrides, Shape};
pub use error::{PatternError, Result};
pub use matcher::Values;
pub use options::{CaptureOrientation, Options};
pub use token::Token;
