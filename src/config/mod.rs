#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use crate::core::engine::OutputMode;
#[cfg(feature = "cli")]
use crate::core::UnmappedCountryPolicy;
#[cfg(feature = "cli")]
use cli::AddressArgs;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "map-link")]
#[command(about = "Build a map directions link from a postal address")]
pub struct CliConfig {
    #[command(flatten)]
    pub address: AddressArgs,

    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<String>,

    #[arg(short, long, help = "Map provider id (overrides the config file)")]
    pub provider: Option<String>,

    #[arg(long, help = "Drop unmapped country codes instead of failing")]
    pub omit_unmapped_country: bool,

    #[arg(long, help = "Print only the formatted address query")]
    pub query_only: bool,

    #[arg(long, help = "Print provider, query and URL as JSON")]
    pub json: bool,

    #[arg(long, help = "List the available providers and exit")]
    pub list_providers: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// `None` leaves the choice to the config file.
    pub fn policy_override(&self) -> Option<UnmappedCountryPolicy> {
        self.omit_unmapped_country
            .then_some(UnmappedCountryPolicy::Omit)
    }

    /// `--query-only` wins over `--json`.
    pub fn output_mode(&self) -> OutputMode {
        if self.query_only {
            OutputMode::Query
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Url
        }
    }
}
