//! vCard core types.
//!
//! - [`VCard`] - The builder: properties, item index, and settings
//! - [`PropertyStore`] - Insertion-ordered key/value storage
//!
//! ## Item Types
//!
//! - [`PhoneItem`] - `TEL` with a [`PhoneType`]
//! - [`EmailItem`] - `EMAIL` with an [`EmailType`]
//! - [`UrlItem`] - `URL` with a [`UrlType`]
//! - [`TextItem`] - Labelled free text
//! - [`AddressItem`] - `ADR`

mod card;
mod item;
mod property;

pub use card::VCard;
pub use item::{
    AddressItem, EmailItem, EmailType, PhoneItem, PhoneType, TextItem, UrlItem, UrlType,
};
pub use property::{PropertyStore, names};
