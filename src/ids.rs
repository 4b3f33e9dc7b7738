//! Identifier extraction from scraped strings.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::convert::NativeId;

// These patterns are compile-time constants; Regex::new cannot fail on them.
static RE_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("invalid int regex"));
static RE_IMDB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tt\d+").expect("invalid IMDb regex"));

/// First decimal run in `text`, parsed as an ID.
pub(crate) fn first_int(text: &str) -> Option<NativeId> {
    RE_INT.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Extracts an ID from each value, preserving order. Values without a
/// decimal run are logged and skipped.
pub(crate) fn int_list(values: &[String], label: &str) -> Vec<NativeId> {
    let mut ids = Vec::new();
    for value in values {
        match first_int(value) {
            Some(id) => ids.push(id),
            None => warn!("no {label} found in {value:?}"),
        }
    }
    ids
}

/// Extracts the `tt…` identifier from an IMDb URL.
pub(crate) fn imdb_id_from_url(url: &str) -> Option<String> {
    RE_IMDB.find(url).map(|m| m.as_str().to_string())
}
