//! Repeatable contact details written as numbered item groups.
//!
//! Each item becomes two lines sharing an `item<N>` group: an `X-ABLABEL`
//! carrying the label, and a kind-specific property carrying the value.

use std::fmt;

/// TYPE parameter of a phone item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneType {
    Work,
    Home,
    Cell,
    Voice,
    Fax,
    Pager,
}

impl PhoneType {
    /// Returns the parameter value as written into the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Home => "home",
            Self::Cell => "cell",
            Self::Voice => "voice",
            Self::Fax => "fax",
            Self::Pager => "pager",
        }
    }
}

/// TYPE parameter of an email item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailType {
    Work,
    Home,
}

impl EmailType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Home => "home",
        }
    }
}

/// Bare parameter of a URL item (`item1.URL;home`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlType {
    Work,
    Home,
}

impl UrlType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Home => "home",
        }
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EmailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UrlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phone number (`TEL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneItem<'a> {
    pub label: &'a str,
    pub value: Option<&'a str>,
    pub kind: PhoneType,
}

impl<'a> PhoneItem<'a> {
    #[must_use]
    pub fn new(label: &'a str, value: &'a str, kind: PhoneType) -> Self {
        Self {
            label,
            value: Some(value),
            kind,
        }
    }
}

/// An email address (`EMAIL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailItem<'a> {
    pub label: &'a str,
    pub value: Option<&'a str>,
    pub kind: EmailType,
}

impl<'a> EmailItem<'a> {
    #[must_use]
    pub fn new(label: &'a str, value: &'a str, kind: EmailType) -> Self {
        Self {
            label,
            value: Some(value),
            kind,
        }
    }
}

/// A web link (`URL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlItem<'a> {
    pub label: &'a str,
    pub value: Option<&'a str>,
    pub kind: UrlType,
}

impl<'a> UrlItem<'a> {
    #[must_use]
    pub fn new(label: &'a str, value: &'a str, kind: UrlType) -> Self {
        Self {
            label,
            value: Some(value),
            kind,
        }
    }
}

/// A labelled free-text field.
///
/// Stored under `URL` without a type parameter, which is how address book
/// clients pick up custom labelled fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextItem<'a> {
    pub label: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> TextItem<'a> {
    #[must_use]
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value: Some(value),
        }
    }
}

/// A postal address (`ADR`).
///
/// All components are optional. Only the non-empty ones are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressItem<'a> {
    pub label: &'a str,
    /// Street line, including any unit or suite.
    pub full_street: Option<&'a str>,
    /// Locality (city).
    pub city: Option<&'a str>,
    /// Region (state or province).
    pub region: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub country: Option<&'a str>,
}

impl<'a> AddressItem<'a> {
    /// Creates an address with only a label set.
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    /// Returns the non-empty components in street, city, region, postal code, country order.
    pub fn components(&self) -> impl Iterator<Item = &'a str> {
        [
            self.full_street,
            self.city,
            self.region,
            self.postal_code,
            self.country,
        ]
        .into_iter()
        .flatten()
        .filter(|c| !c.is_empty())
    }

    /// Returns whether every component is absent or empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components().next().is_none()
    }

    /// Joins the non-empty components with `;`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.components().collect::<Vec<_>>().join(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_strings_are_lowercase() {
        assert_eq!(PhoneType::Cell.to_string(), "cell");
        assert_eq!(PhoneType::Pager.as_str(), "pager");
        assert_eq!(EmailType::Work.to_string(), "work");
        assert_eq!(UrlType::Home.as_str(), "home");
    }

    #[test]
    fn address_skips_missing_components() {
        let address = AddressItem {
            city: Some("NYC"),
            ..AddressItem::new("P")
        };
        assert_eq!(address.joined(), "NYC");
        assert!(!address.is_empty());
    }

    #[test]
    fn address_skips_empty_components() {
        let address = AddressItem {
            full_street: Some(""),
            city: Some("Springfield"),
            region: None,
            postal_code: Some("62701"),
            country: Some(""),
            ..AddressItem::new("Home")
        };
        assert_eq!(address.joined(), "Springfield;62701");
    }

    #[test]
    fn address_all_empty() {
        let address = AddressItem {
            full_street: Some(""),
            ..AddressItem::new("Nowhere")
        };
        assert!(address.is_empty());
        assert_eq!(address.joined(), "");
    }
}
