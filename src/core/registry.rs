use crate::core::providers::{
    DirectionsLink, APPLE_DIRECTIONS_ID, APPLE_DIRECTIONS_NAME, GOOGLE_DIRECTIONS_ID,
    GOOGLE_DIRECTIONS_NAME,
};
use crate::core::{MapLink, ProviderInfo, UnmappedCountryPolicy};
use crate::utils::error::{MapLinkError, Result};
use std::collections::HashMap;

pub type MapLinkFactory = Box<dyn Fn(UnmappedCountryPolicy) -> Box<dyn MapLink> + Send + Sync>;

struct Entry {
    name: String,
    factory: MapLinkFactory,
}

/// Provider id to factory, populated once at startup.
#[derive(Default)]
pub struct MapLinkRegistry {
    entries: HashMap<String, Entry>,
}

impl MapLinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(GOOGLE_DIRECTIONS_ID, GOOGLE_DIRECTIONS_NAME, |policy| {
            Box::new(DirectionsLink::google(policy))
        });
        registry.register(APPLE_DIRECTIONS_ID, APPLE_DIRECTIONS_NAME, |policy| {
            Box::new(DirectionsLink::apple(policy))
        });
        registry
    }

    /// Replaces any provider already registered under `id`.
    pub fn register<F>(&mut self, id: &str, name: &str, factory: F)
    where
        F: Fn(UnmappedCountryPolicy) -> Box<dyn MapLink> + Send + Sync + 'static,
    {
        let previous = self.entries.insert(
            id.to_string(),
            Entry {
                name: name.to_string(),
                factory: Box::new(factory),
            },
        );
        if previous.is_some() {
            tracing::debug!(id, "Replaced map link provider");
        }
    }

    /// Registers a directions link with a fixed base URL and query parameter.
    pub fn register_directions(&mut self, id: &str, name: &str, base: &str, param: &str) {
        let info = ProviderInfo {
            id: id.to_string(),
            name: name.to_string(),
        };
        let base = base.to_string();
        let param = param.to_string();
        self.register(id, name, move |policy| {
            Box::new(DirectionsLink::new(info.clone(), &base, &param, policy))
        });
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn create(&self, id: &str, policy: UnmappedCountryPolicy) -> Result<Box<dyn MapLink>> {
        let entry = self
            .entries
            .get(id)
            .ok_or_else(|| MapLinkError::UnknownProvider { id: id.to_string() })?;
        Ok((entry.factory)(policy))
    }

    pub fn providers(&self) -> Vec<ProviderInfo> {
        let mut providers: Vec<ProviderInfo> = self
            .entries
            .iter()
            .map(|(id, entry)| ProviderInfo {
                id: id.clone(),
                name: entry.name.clone(),
            })
            .collect();
        providers.sort_by(|a, b| a.id.cmp(&b.id));
        providers
    }
}
