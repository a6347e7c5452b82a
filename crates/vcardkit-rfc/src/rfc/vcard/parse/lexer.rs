//! Line splitting and key/value separation.
//!
//! Lines are taken verbatim: no unfolding, no unescaping, no case folding.

use std::sync::LazyLock;

use regex::Regex;

#[expect(clippy::expect_used, reason = "pattern is a literal")]
static ITEM_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^item(\d+)\.").expect("valid item group regex"));

/// Splits input on `\n` or `\r\n`, skipping lines that are blank after trimming.
///
/// Yields `(line_number, line)` with 1-based numbers that count the skipped lines.
/// Kept lines are not trimmed.
pub fn split_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
}

/// Splits a content line at its first `:` into key and value.
///
/// Any further colons belong to the value. Returns `None` if there is no colon.
#[must_use]
pub fn split_content_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
}

/// Returns `N` if the key starts with `item<N>.`.
///
/// Indices that do not fit in a `u64` are ignored.
#[must_use]
pub fn item_index(key: &str) -> Option<u64> {
    ITEM_GROUP
        .captures(key)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}
