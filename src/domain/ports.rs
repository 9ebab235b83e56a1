use crate::domain::model::{AddressRecord, ProviderInfo};
use crate::utils::error::Result;
use std::borrow::Cow;
use std::collections::HashMap;
use url::Url;

/// Lookup from a country code to its display name.
pub trait CountryNameTable: Send + Sync {
    fn country_name(&self, code: &str) -> Option<Cow<'_, str>>;
}

/// A map provider that turns an address into a link.
pub trait MapLink: Send + Sync {
    fn info(&self) -> ProviderInfo;
    /// The destination text embedded in `address_url`.
    fn address_query(&self, address: &AddressRecord, countries: &dyn CountryNameTable) -> Result<String>;
    fn address_url(&self, address: &AddressRecord, countries: &dyn CountryNameTable) -> Result<Url>;
}

impl CountryNameTable for HashMap<String, String> {
    fn country_name(&self, code: &str) -> Option<Cow<'_, str>> {
        self.get(code).map(|name| Cow::Borrowed(name.as_str()))
    }
}
