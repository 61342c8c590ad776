//! Behavioral specs for matching and value extraction.
//!
//! Tests that a compiled pattern:
//! - Binds every mandatory placeholder
//! - Leaves a skipped trailing optional unbound
//! - Binds a skipped optional to "" when a later placeholder matched
//! - Tolerates one trailing separator by default

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// MANDATORY PLACEHOLDERS
// =============================================================================

/// > `{a}/{b}` binds both segments and tolerates a trailing separator.
#[test]
fn mandatory_pair_binds_both() {
    pattern("{a}/{b}")
        .yields("abc/test/", &[("a", "abc"), ("b", "test")])
        .yields("123/111", &[("a", "123"), ("b", "111")])
        .rejects("/t")
        .rejects("abc")
        .rejects("a/b/c");
}

/// > An override constrains only its own placeholder.
#[test]
fn override_constrains_placeholder() {
    pattern("{a}/{b}")
        .with("a", r"\d+")
        .rejects("abc/test/")
        .yields("123/111", &[("a", "123"), ("b", "111")])
        .yields("123/aaa", &[("a", "123"), ("b", "aaa")])
        .rejects("123");
}

/// > Alternation inside an override cannot escape its group.
#[test]
fn override_alternation_is_contained() {
    pattern("{kind}/{slug}")
        .with("kind", "post|page")
        .yields("post/hello", &[("kind", "post"), ("slug", "hello")])
        .rejects("post")
        .rejects("other/hello");
}

// =============================================================================
// OPTIONAL PLACEHOLDERS
// =============================================================================

/// > `{a}/{b?}`: a skipped `b` has no key at all.
#[test]
fn optional_tail_absent_when_skipped() {
    pattern("{a}/{b?}")
        .yields("abc/test/", &[("a", "abc"), ("b", "test")])
        .yields("123/111", &[("a", "123"), ("b", "111")])
        .yields("aaa", &[("a", "aaa")])
        .yields("aaa/", &[("a", "aaa")])
        .rejects("/bbb");
}

/// > `{a?}/{b?}`: a skipped `a` before a bound `b` is present but empty.
#[test]
fn both_optional() {
    pattern("{a?}/{b?}")
        .yields("abc/test/", &[("a", "abc"), ("b", "test")])
        .yields("123/111", &[("a", "123"), ("b", "111")])
        .yields("aaa", &[("a", "aaa")])
        .yields("aaa/", &[("a", "aaa")])
        .yields("/bbb", &[("a", ""), ("b", "bbb")])
        .yields("", &[])
        .yields("/", &[])
        .rejects("//");
}

/// > Literals around optional placeholders keep the separator mandatory.
#[test]
fn optional_between_literals() {
    pattern("pre-{a?}/{b?}-suf")
        .rejects("abc/test/")
        .yields("pre-abc/def-suf", &[("a", "abc"), ("b", "def")])
        .yields("pre-abc/def-suf/", &[("a", "abc"), ("b", "def")])
        .yields("pre-/def-suf", &[("a", ""), ("b", "def")])
        .yields("pre-abc/-suf", &[("a", "abc")])
        .yields("pre-/-suf", &[])
        .rejects("pre/suf");
}

/// > A literal path segment before an optional placeholder.
#[test]
fn static_prefix_with_optional() {
    pattern("/users/{id}/{tab?}")
        .with("id", r"\d+")
        .yields("/users/42", &[("id", "42")])
        .yields("/users/42/", &[("id", "42")])
        .yields("/users/42/posts", &[("id", "42"), ("tab", "posts")])
        .rejects("/users/")
        .rejects("/users/x/posts");
}

// =============================================================================
// OPTIONS
// =============================================================================

/// > Right orientation folds the separator after an optional placeholder.
#[test]
fn right_orientation() {
    pattern("{a?}/{b}")
        .options(Options::default().with_capture(CaptureOrientation::Right))
        .yields("x/y", &[("a", "x"), ("b", "y")])
        .yields("y", &[("a", ""), ("b", "y")])
        .rejects("/y");
}

/// > Without trailing-separator tolerance an extra separator fails.
#[test]
fn strict_trailing_separator() {
    pattern("{a}/{b}")
        .options(Options::default().with_trailing_separator(false))
        .yields("x/y", &[("a", "x"), ("b", "y")])
        .rejects("x/y/");
}

/// > Custom markers and separator.
#[test]
fn custom_syntax() {
    let options = Options::default()
        .with_markers('<', '>')
        .with_separator('.')
        .with_optional_marker('*');
    pattern("<host>.<zone*>")
        .options(options)
        .yields("example.com", &[("host", "example"), ("zone", "com")])
        .yields("localhost", &[("host", "localhost")])
        .yields("localhost.", &[("host", "localhost")])
        .rejects("a..b");
}

/// > Options loaded from TOML behave like the equivalent builder calls.
#[test]
fn options_from_toml() {
    let toml = "separator = \":\"\nallow_trailing_separator = false";
    let options = Options::from_toml(toml).unwrap();
    pattern("{user}:{role?}")
        .options(options)
        .yields("ann:admin", &[("user", "ann"), ("role", "admin")])
        .yields("ann", &[("user", "ann")])
        .rejects("ann:");
}
