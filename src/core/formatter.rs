use crate::core::{AddressRecord, CountryNameTable, UnmappedCountryPolicy};
use crate::utils::error::{MapLinkError, Result};
use url::Url;

/// Turns an address into a space-joined query string and embeds it in a
/// provider URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressQueryFormatter {
    policy: UnmappedCountryPolicy,
}

impl AddressQueryFormatter {
    pub fn new(policy: UnmappedCountryPolicy) -> Self {
        Self { policy }
    }

    /// Order is fixed: line1, line2, locality, administrative area,
    /// dependent locality, postal code, country name.
    pub fn format_query(
        &self,
        address: &AddressRecord,
        countries: &dyn CountryNameTable,
    ) -> Result<String> {
        let country_name = match address.country_code() {
            Some(code) => match countries.country_name(code) {
                Some(name) => Some(name),
                None => match self.policy {
                    UnmappedCountryPolicy::Fail => {
                        return Err(MapLinkError::MissingCountryMapping {
                            code: code.to_string(),
                        });
                    }
                    UnmappedCountryPolicy::Omit => {
                        tracing::warn!(code, "No country name mapped, omitting country from query");
                        None
                    }
                },
            },
            None => None,
        };

        let mut parts: Vec<&str> = address.street_parts().collect();
        if let Some(name) = country_name.as_deref().filter(|name| !name.is_empty()) {
            parts.push(name);
        }

        Ok(parts.join(" "))
    }

    /// `base` with the formatted address as its single `param` query value.
    pub fn build_url(
        &self,
        base: &str,
        param: &str,
        address: &AddressRecord,
        countries: &dyn CountryNameTable,
    ) -> Result<Url> {
        let query = self.format_query(address, countries)?;
        let mut url = Url::parse(base)?;
        url.query_pairs_mut().clear().append_pair(param, &query);
        tracing::debug!(%url, "Built map link");
        Ok(url)
    }
}
