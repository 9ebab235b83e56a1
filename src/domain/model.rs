use serde::{Deserialize, Serialize};

/// A structured postal address. Every component is optional; an empty
/// string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
    pub dependent_locality: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
}

impl AddressRecord {
    /// Components before the country, in query order, with absent and empty
    /// values dropped.
    pub fn street_parts(&self) -> impl Iterator<Item = &str> {
        [
            &self.line1,
            &self.line2,
            &self.locality,
            &self.administrative_area,
            &self.dependent_locality,
            &self.postal_code,
        ]
        .into_iter()
        .filter_map(|field| non_empty(field))
    }

    pub fn country_code(&self) -> Option<&str> {
        non_empty(&self.country_code)
    }

    pub fn is_empty(&self) -> bool {
        self.street_parts().next().is_none() && self.country_code().is_none()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// What to do with a country code the table has no name for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedCountryPolicy {
    #[default]
    Fail,
    Omit,
}

/// Registration metadata of a map link provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_strings_count_as_absent() {
        let address = AddressRecord {
            line1: Some(String::new()),
            country_code: Some(String::new()),
            ..Default::default()
        };
        assert!(address.is_empty());
        assert_eq!(address.country_code(), None);
    }

    #[test]
    fn test_street_parts_keep_field_order() {
        let address = AddressRecord {
            postal_code: Some("8001".to_string()),
            line1: Some("Bahnhofstrasse 1".to_string()),
            locality: Some("Zürich".to_string()),
            ..Default::default()
        };
        let parts: Vec<&str> = address.street_parts().collect();
        assert_eq!(parts, vec!["Bahnhofstrasse 1", "Zürich", "8001"]);
    }

    #[test]
    fn test_deserialize_partial_record() {
        let address: AddressRecord =
            serde_json::from_str(r#"{"locality": "London", "country_code": "GB"}"#).unwrap();
        assert_eq!(address.locality.as_deref(), Some("London"));
        assert_eq!(address.line1, None);
    }

    #[test]
    fn test_policy_from_snake_case() {
        let policy: UnmappedCountryPolicy = serde_json::from_str(r#""omit""#).unwrap();
        assert_eq!(policy, UnmappedCountryPolicy::Omit);
    }
}
