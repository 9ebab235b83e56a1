use crate::core::country::{CountryOverlay, StandardCountries};
use crate::core::providers::GOOGLE_DIRECTIONS_ID;
use crate::core::registry::MapLinkRegistry;
use crate::core::UnmappedCountryPolicy;
use crate::utils::error::{MapLinkError, Result};
use crate::utils::validation::{
    validate_country_code, validate_non_empty_string, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub link: LinkConfig,
    /// Country code to display name, layered over the standard list.
    #[serde(default)]
    pub countries: HashMap<String, String>,
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkConfig {
    pub provider: Option<String>,
    pub unmapped_country: Option<UnmappedCountryPolicy>,
}

/// An extra directions provider declared in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub id: String,
    pub name: String,
    pub base_url: String,
    pub param: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MapLinkError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${COUNTRY_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MapLinkError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn provider_id(&self) -> &str {
        self.link.provider.as_deref().unwrap_or(GOOGLE_DIRECTIONS_ID)
    }

    pub fn unmapped_country(&self) -> UnmappedCountryPolicy {
        self.link.unmapped_country.unwrap_or_default()
    }

    /// Standard country list with this config's names layered on top.
    pub fn country_table(&self) -> CountryOverlay<StandardCountries> {
        CountryOverlay::new(StandardCountries, self.countries.clone())
    }

    /// Built-in providers plus those declared under `[[providers]]`.
    pub fn registry(&self) -> MapLinkRegistry {
        let mut registry = MapLinkRegistry::with_builtin();
        for provider in &self.providers {
            registry.register_directions(
                &provider.id,
                &provider.name,
                &provider.base_url,
                &provider.param,
            );
        }
        registry
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(provider) = &self.link.provider {
            validate_non_empty_string("link.provider", provider)?;
        }

        let mut codes: Vec<&String> = self.countries.keys().collect();
        codes.sort();
        let mut seen = HashSet::new();
        for code in codes {
            validate_country_code("countries", code)?;
            validate_non_empty_string(&format!("countries.{}", code), &self.countries[code])?;
            if !seen.insert(code.to_ascii_uppercase()) {
                return Err(MapLinkError::InvalidConfigValueError {
                    field: "countries".to_string(),
                    value: code.clone(),
                    reason: "Country code is already listed with different letter case".to_string(),
                });
            }
        }

        for provider in &self.providers {
            validate_non_empty_string("providers.id", &provider.id)?;
            validate_non_empty_string("providers.name", &provider.name)?;
            validate_non_empty_string("providers.param", &provider.param)?;
            validate_url("providers.base_url", &provider.base_url)?;
        }

        Ok(())
    }
}
