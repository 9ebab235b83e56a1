pub mod country;
pub mod engine;
pub mod formatter;
pub mod providers;
pub mod registry;

pub use crate::domain::model::{AddressRecord, ProviderInfo, UnmappedCountryPolicy};
pub use crate::domain::ports::{CountryNameTable, MapLink};
pub use crate::utils::error::Result;
