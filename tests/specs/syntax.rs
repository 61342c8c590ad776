//! Behavioral specs for template syntax errors.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

fn compile(pattern: &str) -> Result<String, PatternError> {
    Builder::default().compile(pattern, &Overrides::new())
}

/// > Names must start with a letter and contain only letters, digits, `_`.
#[test]
fn rejects_invalid_names() {
    for bad in ["{1abc}", "{a-b}", "{}", "{?}", "x/{a.b}"] {
        match compile(bad) {
            Err(PatternError::InvalidName { .. }) => {}
            other => panic!("{bad:?} should be an invalid name, got {other:?}"),
        }
    }
}

#[test]
fn accepts_underscore_and_digits() {
    assert!(compile("{a_1}").is_ok());
    assert!(compile("{A9}/{b_?}").is_ok());
}

/// > An open placeholder at end of input is a syntax error.
#[test]
fn rejects_unterminated() {
    let err = compile("a/{b").unwrap_err();
    assert!(matches!(err, PatternError::Unterminated { position: 2 }));
    assert!(err.to_string().contains("offset 2"));
}

/// > A `?` not directly before `}` is ordinary text.
#[test]
fn stray_optional_marker_is_literal() {
    let builder = Builder::default();
    let source = builder.compile("{a?b}", &Overrides::new()).unwrap();
    assert!(builder.is_match(&source, "{a?b}").unwrap());
    assert!(builder.names_of("{a?b}").unwrap().is_empty());
}

/// > A failed compile leaves no cache entry behind.
#[test]
fn errors_are_not_cached() {
    let builder = Builder::default();
    assert!(builder.compile("{1}", &Overrides::new()).is_err());
    assert!(builder.compile("{1}", &Overrides::new()).is_err());
    assert!(builder.tokens("{1}").is_err());
}
