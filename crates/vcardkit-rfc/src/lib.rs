//! vCard 3.0 contact builder and parser.
//!
//! See [`rfc::vcard`] for the builder, parser, and serializer.

pub mod error;
pub mod rfc;
