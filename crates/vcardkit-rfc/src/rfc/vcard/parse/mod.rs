//! vCard parsing.
//!
//! ## Usage
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! item1.URL;home:https://example.com:8080/path\r\n\
//! END:VCARD\r\n";
//!
//! let card = parse::parse(input);
//! assert_eq!(card.properties().get("FN"), Some("John Doe"));
//! assert_eq!(
//!     card.properties().get("item1.URL;home"),
//!     Some("https://example.com:8080/path")
//! );
//! assert_eq!(card.next_item_index(), Some(2));
//! ```
//!
//! ## Features
//!
//! - Accepts `\n` and `\r\n` line endings; blank lines are skipped
//! - Splits each line at its first colon, so values may contain colons
//! - Keys are kept verbatim, including group and parameters
//! - Strict mode reports malformed lines with their line numbers

mod error;
mod lexer;
mod parser;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{item_index, split_content_line, split_lines};
pub use parser::{parse, parse_strict, parse_strict_with_settings, parse_with_settings};
