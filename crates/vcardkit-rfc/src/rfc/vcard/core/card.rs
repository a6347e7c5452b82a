//! The vCard builder.

use std::sync::LazyLock;

use regex::Regex;
use vcardkit_core::config::BuilderSettings;

use super::item::{AddressItem, EmailItem, PhoneItem, TextItem, UrlItem};
use super::property::{PropertyStore, names};
use crate::error::RfcResult;

#[expect(clippy::expect_used, reason = "pattern is a literal")]
static DATA_URL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:image/(jpeg|png|gif);base64,").expect("valid data URL regex")
});

/// A vCard 3.0 contact under construction.
///
/// Properties are kept in insertion order and rendered verbatim, one
/// `key:value` line each. Setters and adders return `&mut Self` so calls can
/// be chained.
///
/// ```rust
/// use vcardkit_rfc::rfc::vcard::{PhoneItem, PhoneType, VCard};
///
/// let mut card = VCard::new();
/// card.set_name(Some("John"), Some("Doe"))
///     .set_organization(Some("Tech Corp"))
///     .add_phone(PhoneItem::new("Mobile", "+1-555-123-4567", PhoneType::Cell));
///
/// let text = card.to_vcard_string();
/// assert!(text.starts_with("BEGIN:VCARD\nVERSION:3.0\nFN:John Doe\n"));
/// assert!(text.contains("item1.TEL;PREF=1;TYPE=cell:+1-555-123-4567"));
/// assert!(text.ends_with("END:VCARD"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCard {
    pub(crate) properties: PropertyStore,
    pub(crate) next_item: Option<u64>,
    pub(crate) settings: BuilderSettings,
}

impl Default for VCard {
    fn default() -> Self {
        Self::seeded(BuilderSettings::default())
    }
}

impl VCard {
    /// Creates a card holding only `BEGIN:VCARD` and `VERSION:3.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a seeded card that uses the given builder settings.
    ///
    /// ## Errors
    /// Returns an error if the settings fail validation.
    pub fn with_settings(settings: BuilderSettings) -> RfcResult<Self> {
        settings.validate()?;
        Ok(Self::seeded(settings))
    }

    fn seeded(settings: BuilderSettings) -> Self {
        let mut properties = PropertyStore::new();
        properties.set(names::BEGIN, names::VCARD);
        properties.set(names::VERSION, names::VERSION_3_0);

        Self {
            properties,
            next_item: Some(1),
            settings,
        }
    }

    /// Creates a card from already-parsed properties.
    pub(crate) fn from_parts(
        properties: PropertyStore,
        next_item: Option<u64>,
        settings: BuilderSettings,
    ) -> Self {
        Self {
            properties,
            next_item,
            settings,
        }
    }

    /// Returns the stored properties.
    #[must_use]
    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    /// Returns the index the next item group will use, or `None` once
    /// `item18446744073709551615` has been used and adders no longer write.
    #[must_use]
    pub fn next_item_index(&self) -> Option<u64> {
        self.next_item
    }

    #[must_use]
    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    /// Sets `FN` and `N` from a first and last name.
    ///
    /// `FN` is `"first last"` when both are present, otherwise whichever one is.
    /// `N` is `"last;first;;;"`. Does nothing if both are absent.
    pub fn set_name(&mut self, first: Option<&str>, last: Option<&str>) -> &mut Self {
        let first = self.settings.present(first);
        let last = self.settings.present(last);

        let full = match (first, last) {
            (None, None) => return self,
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(single), None) | (None, Some(single)) => single.to_string(),
        };

        self.properties.set(names::FN, full);
        self.properties.set(
            names::N,
            format!("{};{};;;", last.unwrap_or_default(), first.unwrap_or_default()),
        );
        self
    }

    pub fn set_organization(&mut self, organization: Option<&str>) -> &mut Self {
        self.set_single(names::ORG, organization)
    }

    pub fn set_note(&mut self, note: Option<&str>) -> &mut Self {
        self.set_single(names::NOTE, note)
    }

    pub fn set_job_title(&mut self, job_title: Option<&str>) -> &mut Self {
        self.set_single(names::TITLE, job_title)
    }

    fn set_single(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = self.settings.present(value) {
            self.properties.set(key, value);
        }
        self
    }

    /// Sets a base64 photo.
    ///
    /// A leading `data:image/(jpeg|png|gif);base64,` prefix is stripped. The
    /// image type becomes part of the key, so photos of different types are
    /// stored side by side. `None` uses the configured default type.
    pub fn set_photo(&mut self, data: &str, image_type: Option<&str>) -> &mut Self {
        let payload = DATA_URL_PREFIX.replace(data, "");
        let image_type = image_type.unwrap_or(self.settings.default_photo_type.as_str());

        let key = format!("{};ENCODING=BASE64;TYPE={image_type}", names::PHOTO);
        self.properties.set(key, payload);
        self
    }

    pub fn add_phone(&mut self, item: PhoneItem<'_>) -> &mut Self {
        let suffix = format!("{};PREF=1;TYPE={}", names::TEL, item.kind);
        self.add_item(item.label, &suffix, item.value)
    }

    pub fn add_email(&mut self, item: EmailItem<'_>) -> &mut Self {
        let suffix = format!("{};CHARSET=UTF-8;TYPE={}", names::EMAIL, item.kind);
        self.add_item(item.label, &suffix, item.value)
    }

    pub fn add_url(&mut self, item: UrlItem<'_>) -> &mut Self {
        let suffix = format!("{};{}", names::URL, item.kind);
        self.add_item(item.label, &suffix, item.value)
    }

    pub fn add_text(&mut self, item: TextItem<'_>) -> &mut Self {
        self.add_item(item.label, names::URL, item.value)
    }

    /// Adds an address whose value is the non-empty components joined by `;`.
    pub fn add_address(&mut self, item: AddressItem<'_>) -> &mut Self {
        if item.is_empty() {
            tracing::trace!(label = item.label, "Skipping empty address");
            return self;
        }

        let suffix = format!("{};CHARSET=UTF-8", names::ADR);
        let joined = item.joined();
        self.add_item(item.label, &suffix, Some(joined.as_str()))
    }

    /// Writes an `item<N>` label/value pair and advances the index.
    ///
    /// Does nothing once the index space is exhausted, so existing groups are
    /// never overwritten.
    fn add_item(&mut self, label: &str, suffix: &str, value: Option<&str>) -> &mut Self {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            tracing::trace!(label, property = suffix, "Skipping item without a value");
            return self;
        };

        let Some(index) = self.next_item else {
            tracing::warn!(
                label,
                property = suffix,
                "Item index space exhausted, skipping item"
            );
            return self;
        };

        let group = format!("item{index}");
        self.properties
            .set(format!("{group}.{}", names::X_ABLABEL), label);
        self.properties.set(format!("{group}.{suffix}"), value);
        self.next_item = index.checked_add(1);

        tracing::trace!(group, property = suffix, "Added item group");
        self
    }

    /// Serializes the card; see [`crate::rfc::vcard::serialize`].
    pub fn to_vcard_string(&mut self) -> String {
        crate::rfc::vcard::build::serialize(self)
    }
}

impl From<&str> for VCard {
    /// Parses leniently; see [`parse`](crate::rfc::vcard::parse::parse).
    fn from(input: &str) -> Self {
        crate::rfc::vcard::parse::parse(input)
    }
}
