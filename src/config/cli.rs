use crate::core::AddressRecord;
use crate::utils::error::Result;
use clap::Args;
use std::fs;

/// Address components given on the command line, or a JSON address file.
#[derive(Debug, Clone, Default, Args)]
pub struct AddressArgs {
    #[arg(long, help = "JSON file holding an address record")]
    pub address: Option<String>,

    #[arg(long)]
    pub line1: Option<String>,

    #[arg(long)]
    pub line2: Option<String>,

    #[arg(long)]
    pub locality: Option<String>,

    #[arg(long)]
    pub administrative_area: Option<String>,

    #[arg(long)]
    pub dependent_locality: Option<String>,

    #[arg(long)]
    pub postal_code: Option<String>,

    #[arg(long, help = "ISO 3166-1 alpha-2 country code")]
    pub country_code: Option<String>,
}

impl AddressArgs {
    /// Flags given on the command line override fields read from the file.
    pub fn to_record(&self) -> Result<AddressRecord> {
        let mut record = match &self.address {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                serde_json::from_str(&content)?
            }
            None => AddressRecord::default(),
        };

        let overrides = [
            (&mut record.line1, &self.line1),
            (&mut record.line2, &self.line2),
            (&mut record.locality, &self.locality),
            (&mut record.administrative_area, &self.administrative_area),
            (&mut record.dependent_locality, &self.dependent_locality),
            (&mut record.postal_code, &self.postal_code),
            (&mut record.country_code, &self.country_code),
        ];
        for (field, value) in overrides {
            if value.is_some() {
                *field = value.clone();
            }
        }

        Ok(record)
    }
}
