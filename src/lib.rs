pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::AddressArgs, CliConfig};

pub use config::toml_config::TomlConfig;
pub use crate::core::{
    country::{CountryOverlay, StandardCountries},
    engine::{LinkOutput, MapLinkEngine, OutputMode},
    formatter::AddressQueryFormatter,
    providers::DirectionsLink,
    registry::MapLinkRegistry,
};
pub use domain::model::{AddressRecord, ProviderInfo, UnmappedCountryPolicy};
pub use domain::ports::{CountryNameTable, MapLink};
pub use utils::error::{MapLinkError, Result};
