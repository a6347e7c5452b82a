//! vCard document parser.

use vcardkit_core::config::BuilderSettings;

use super::error::{ParseError, ParseResult};
use super::lexer::{item_index, split_content_line, split_lines};
use crate::error::RfcResult;
use crate::rfc::vcard::core::{PropertyStore, VCard};

/// Parses a vCard string into an editable [`VCard`].
///
/// ## Summary
/// Each non-blank line is split at its first `:` into key and value and stored
/// in order; lines without a colon are dropped. The default `BEGIN`/`VERSION`
/// seed is not applied, so the card holds exactly what the text holds. The item
/// index continues after the highest `item<N>.` group found.
///
/// Never fails; the worst case is a card with no properties.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn parse(input: &str) -> VCard {
    let (properties, next_item) = collect_lenient(input);
    VCard::from_parts(properties, next_item, BuilderSettings::default())
}

/// Parses like [`parse`], attaching the given builder settings to the result.
///
/// ## Errors
/// Returns an error if the settings fail validation.
#[tracing::instrument(skip(input, settings), fields(input_len = input.len()))]
pub fn parse_with_settings(input: &str, settings: BuilderSettings) -> RfcResult<VCard> {
    settings.validate()?;
    let (properties, next_item) = collect_lenient(input);
    Ok(VCard::from_parts(properties, next_item, settings))
}

/// Parses a vCard string, rejecting malformed lines instead of dropping them.
///
/// ## Errors
/// Returns a parse error for the first line that has no `:` or has an empty key.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_strict(input: &str) -> ParseResult<VCard> {
    let (properties, next_item) = collect_strict(input)?;
    Ok(VCard::from_parts(
        properties,
        next_item,
        BuilderSettings::default(),
    ))
}

/// Parses like [`parse_strict`], attaching the given builder settings to the result.
///
/// ## Errors
/// Returns an error if the settings fail validation or a line is malformed.
#[tracing::instrument(skip(input, settings), fields(input_len = input.len()))]
pub fn parse_strict_with_settings(input: &str, settings: BuilderSettings) -> RfcResult<VCard> {
    settings.validate()?;
    let (properties, next_item) = collect_strict(input)?;
    Ok(VCard::from_parts(properties, next_item, settings))
}

/// Accumulates parsed properties and the highest item index seen.
#[derive(Debug, Default)]
struct Collector {
    properties: PropertyStore,
    max_item: u64,
}

impl Collector {
    fn push(&mut self, key: &str, value: &str) {
        if let Some(index) = item_index(key) {
            self.max_item = self.max_item.max(index);
        }
        self.properties.set(key, value);
    }

    /// Returns the store and the next item index, `None` once the index space
    /// is exhausted.
    fn finish(self, dropped: usize) -> (PropertyStore, Option<u64>) {
        let next_item = self.max_item.checked_add(1);

        tracing::debug!(
            count = self.properties.len(),
            dropped,
            next_item,
            "Parsed vCard properties"
        );

        (self.properties, next_item)
    }
}

/// Stores every line that has a `:` and drops the rest.
fn collect_lenient(input: &str) -> (PropertyStore, Option<u64>) {
    let mut collector = Collector::default();
    let mut dropped = 0usize;

    for (line_num, line) in split_lines(input) {
        if let Some((key, value)) = split_content_line(line) {
            collector.push(key, value);
        } else {
            tracing::trace!(line = line_num, "Dropping line without ':'");
            dropped += 1;
        }
    }

    collector.finish(dropped)
}

/// Stores every line, failing on the first one without a `:` or with an empty key.
fn collect_strict(input: &str) -> ParseResult<(PropertyStore, Option<u64>)> {
    let mut collector = Collector::default();

    for (line_num, line) in split_lines(input) {
        let Some((key, value)) = split_content_line(line) else {
            return Err(ParseError::missing_separator(line_num, line));
        };

        if key.is_empty() {
            return Err(ParseError::empty_property_name(line_num));
        }

        collector.push(key, value);
    }

    Ok(collector.finish(0))
}
