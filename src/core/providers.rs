use crate::core::formatter::AddressQueryFormatter;
use crate::core::{AddressRecord, CountryNameTable, MapLink, ProviderInfo, UnmappedCountryPolicy};
use crate::utils::error::Result;
use url::Url;

pub const GOOGLE_DIRECTIONS_ID: &str = "google_directions";
pub const GOOGLE_DIRECTIONS_NAME: &str = "Google Directions";
pub const GOOGLE_DIRECTIONS_BASE: &str = "https://google.com/maps";

pub const APPLE_DIRECTIONS_ID: &str = "apple_directions";
pub const APPLE_DIRECTIONS_NAME: &str = "Apple Maps Directions";
pub const APPLE_DIRECTIONS_BASE: &str = "https://maps.apple.com/";

/// Query parameter carrying the destination address.
pub const DESTINATION_PARAM: &str = "daddr";

/// Link to a provider's directions page with the address as destination.
#[derive(Debug, Clone)]
pub struct DirectionsLink {
    info: ProviderInfo,
    base: String,
    param: String,
    formatter: AddressQueryFormatter,
}

impl DirectionsLink {
    pub fn new(info: ProviderInfo, base: &str, param: &str, policy: UnmappedCountryPolicy) -> Self {
        Self {
            info,
            base: base.to_string(),
            param: param.to_string(),
            formatter: AddressQueryFormatter::new(policy),
        }
    }

    pub fn google(policy: UnmappedCountryPolicy) -> Self {
        Self::new(
            ProviderInfo {
                id: GOOGLE_DIRECTIONS_ID.to_string(),
                name: GOOGLE_DIRECTIONS_NAME.to_string(),
            },
            GOOGLE_DIRECTIONS_BASE,
            DESTINATION_PARAM,
            policy,
        )
    }

    pub fn apple(policy: UnmappedCountryPolicy) -> Self {
        Self::new(
            ProviderInfo {
                id: APPLE_DIRECTIONS_ID.to_string(),
                name: APPLE_DIRECTIONS_NAME.to_string(),
            },
            APPLE_DIRECTIONS_BASE,
            DESTINATION_PARAM,
            policy,
        )
    }

    pub fn formatter(&self) -> &AddressQueryFormatter {
        &self.formatter
    }
}

impl MapLink for DirectionsLink {
    fn info(&self) -> ProviderInfo {
        self.info.clone()
    }

    fn address_query(&self, address: &AddressRecord, countries: &dyn CountryNameTable) -> Result<String> {
        self.formatter.format_query(address, countries)
    }

    fn address_url(&self, address: &AddressRecord, countries: &dyn CountryNameTable) -> Result<Url> {
        self.formatter
            .build_url(&self.base, &self.param, address, countries)
    }
}
