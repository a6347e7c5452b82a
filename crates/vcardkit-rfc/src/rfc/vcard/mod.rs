//! vCard 3.0 builder and parser.
//!
//! A card is an insertion-ordered mapping from raw property key (group and
//! parameters included, e.g. `item1.TEL;PREF=1;TYPE=cell`) to raw value.
//! Serialization writes one `key:value` line per entry; parsing splits each
//! line at its first colon. Neither direction folds or escapes, so any card
//! whose values contain no line breaks survives a round trip unchanged.
//!
//! ## Usage
//!
//! ### Building
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::{AddressItem, EmailItem, EmailType, VCard};
//!
//! let mut card = VCard::new();
//! card.set_name(Some("Jane"), Some("Smith"))
//!     .set_job_title(Some("Engineer"))
//!     .add_email(EmailItem::new("Work", "jane@work.com", EmailType::Work))
//!     .add_address(AddressItem {
//!         city: Some("NYC"),
//!         ..AddressItem::new("Office")
//!     });
//!
//! let output = card.to_vcard_string();
//! assert!(output.contains("item1.EMAIL;CHARSET=UTF-8;TYPE=work:jane@work.com"));
//! assert!(output.contains("item2.ADR;CHARSET=UTF-8:NYC"));
//! ```
//!
//! ### Parsing and editing
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::{PhoneItem, PhoneType, VCard};
//!
//! let mut card = VCard::from("BEGIN:VCARD\nVERSION:3.0\nitem3.URL:x\nEND:VCARD");
//! card.add_phone(PhoneItem::new("Desk", "+1-555-000-0000", PhoneType::Work));
//!
//! assert!(card.to_vcard_string().contains("item4.TEL;PREF=1;TYPE=work:+1-555-000-0000"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `PropertyStore`, item types)
//! - [`parse`] - Parsing functions and error types
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{render, serialize};
pub use core::{
    AddressItem, EmailItem, EmailType, PhoneItem, PhoneType, PropertyStore, TextItem, UrlItem,
    UrlType, VCard,
};
pub use parse::{
    ParseError, ParseErrorKind, ParseResult, parse, parse_strict, parse_strict_with_settings,
    parse_with_settings,
};
