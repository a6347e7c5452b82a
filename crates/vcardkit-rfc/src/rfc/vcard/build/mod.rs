//! vCard serialization.
//!
//! ## Usage
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::{VCard, serialize};
//!
//! let mut card = VCard::new();
//! card.set_name(Some("John"), Some("Doe"));
//!
//! assert_eq!(
//!     serialize(&mut card),
//!     "BEGIN:VCARD\nVERSION:3.0\nFN:John Doe\nN:Doe;John;;;\nEND:VCARD"
//! );
//! ```
//!
//! Values are written verbatim: no folding and no escaping. Lines are joined
//! with `\n` and there is no trailing newline.

use crate::rfc::vcard::core::{PropertyStore, VCard, names};

/// Serializes a card, writing `END:VCARD` into it first.
///
/// `END` is an ordinary key, so serializing again overwrites it in place and
/// yields the same text.
pub fn serialize(card: &mut VCard) -> String {
    card.properties.set(names::END, names::VCARD);
    let output = render(&card.properties);

    tracing::debug!(
        count = card.properties.len(),
        output_len = output.len(),
        "Serialized vCard"
    );

    output
}

/// Renders properties as `key:value` lines joined by `\n`, without adding `END`.
#[must_use]
pub fn render(properties: &PropertyStore) -> String {
    let mut output = String::new();

    for (idx, (key, value)) in properties.iter().enumerate() {
        if idx > 0 {
            output.push('\n');
        }
        output.push_str(key);
        output.push(':');
        output.push_str(value);
    }

    output
}
