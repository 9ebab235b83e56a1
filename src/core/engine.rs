use crate::config::toml_config::TomlConfig;
use crate::core::country::{CountryOverlay, StandardCountries};
use crate::core::{AddressRecord, CountryNameTable, MapLink, ProviderInfo, UnmappedCountryPolicy};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkOutput {
    pub provider: ProviderInfo,
    pub query: String,
    pub url: String,
}

/// What `render` prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Url,
    Query,
    Json,
}

/// A chosen provider bound to a country table. The provider owns the
/// unmapped-country policy.
pub struct MapLinkEngine<T: CountryNameTable> {
    provider: Box<dyn MapLink>,
    countries: T,
}

impl<T: CountryNameTable> MapLinkEngine<T> {
    pub fn new(provider: Box<dyn MapLink>, countries: T) -> Self {
        Self {
            provider,
            countries,
        }
    }

    pub fn provider(&self) -> ProviderInfo {
        self.provider.info()
    }

    pub fn query(&self, address: &AddressRecord) -> Result<String> {
        self.provider.address_query(address, &self.countries)
    }

    pub fn link(&self, address: &AddressRecord) -> Result<LinkOutput> {
        let query = self.query(address)?;
        let url = self.provider.address_url(address, &self.countries)?;
        Ok(LinkOutput {
            provider: self.provider.info(),
            query,
            url: url.into(),
        })
    }

    pub fn render(&self, address: &AddressRecord, mode: OutputMode) -> Result<String> {
        match mode {
            OutputMode::Query => self.query(address),
            OutputMode::Url => Ok(self.link(address)?.url),
            OutputMode::Json => Ok(serde_json::to_string_pretty(&self.link(address)?)?),
        }
    }
}

impl MapLinkEngine<CountryOverlay<StandardCountries>> {
    /// `provider` and `policy` take precedence over the config file.
    pub fn from_config(
        config: &TomlConfig,
        provider: Option<&str>,
        policy: Option<UnmappedCountryPolicy>,
    ) -> Result<Self> {
        let provider_id = provider.unwrap_or_else(|| config.provider_id());
        let policy = policy.unwrap_or_else(|| config.unmapped_country());
        let link = config.registry().create(provider_id, policy)?;
        tracing::debug!(provider = provider_id, ?policy, "Map link engine ready");
        Ok(Self::new(link, config.country_table()))
    }
}
