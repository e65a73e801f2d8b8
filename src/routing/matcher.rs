//! Path pattern matching
//!
//! Compares a `/`-delimited pattern against a concrete request path.
//! A pattern segment starting with `:` accepts any value at that position
//! and records it under the rest of the segment.

use std::collections::HashMap;

/// Marker that turns a pattern segment into a named capture
pub const CAPTURE_MARKER: char = ':';

/// Values captured from `:name` segments, keyed by name
pub type Params = HashMap<String, String>;

/// Match `path` against `pattern`
///
/// Returns `Some(params)` when the path matches. Identical strings match
/// without being split and carry no parameters. Otherwise both sides must
/// have the same number of segments, and each segment must either be equal
/// or be a capture in the pattern. Nothing is decoded or trimmed.
pub fn match_pattern(pattern: &str, path: &str) -> Option<Params> {
    if pattern == path {
        return Some(Params::new());
    }

    if pattern.matches('/').count() != path.matches('/').count() {
        return None;
    }

    let mut params = Params::new();
    for (expected, actual) in pattern.split('/').zip(path.split('/')) {
        if expected == actual {
            continue;
        }
        let name = capture_name(expected)?;
        params.insert(name.to_string(), actual.to_string());
    }

    Some(params)
}

/// Name bound by a capture segment, `None` for a literal one
///
/// A bare `:` is a capture with an empty name.
pub fn capture_name(segment: &str) -> Option<&str> {
    segment.strip_prefix(CAPTURE_MARKER)
}
