use anyhow::Result;
use map_link::utils::validation::Validate;
use map_link::{AddressRecord, MapLinkEngine, MapLinkError, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_config_overrides_country_and_provider() -> Result<()> {
    let file = write_config(
        r#"
[link]
provider = "osm"

[countries]
GB = "UK"

[[providers]]
id = "osm"
name = "OpenStreetMap"
base_url = "https://www.openstreetmap.org/directions"
param = "to"
"#,
    )?;
    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;

    let engine = MapLinkEngine::from_config(&config, None, None)?;
    let address = AddressRecord {
        locality: Some("Bath".to_string()),
        country_code: Some("gb".to_string()),
        ..Default::default()
    };
    let output = engine.link(&address)?;

    assert_eq!(output.provider.id, "osm");
    assert_eq!(output.query, "Bath UK");
    assert_eq!(output.url, "https://www.openstreetmap.org/directions?to=Bath+UK");
    Ok(())
}

#[test]
fn test_config_omit_policy() -> Result<()> {
    let file = write_config("[link]\nunmapped_country = \"omit\"\n")?;
    let config = TomlConfig::from_file(file.path())?;
    let engine = MapLinkEngine::from_config(&config, None, None)?;

    let address = AddressRecord {
        locality: Some("Springfield".to_string()),
        country_code: Some("ZZ".to_string()),
        ..Default::default()
    };
    assert_eq!(engine.query(&address)?, "Springfield");
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let result = TomlConfig::from_file("/nonexistent/map-link.toml");
    assert!(matches!(result, Err(MapLinkError::IoError(_))));
}

#[test]
fn test_link_output_serializes() -> Result<()> {
    let engine = MapLinkEngine::from_config(&TomlConfig::default(), None, None)?;
    let output = engine.link(&AddressRecord::default())?;
    let json = serde_json::to_value(&output)?;

    assert_eq!(json["provider"]["id"], "google_directions");
    assert_eq!(json["query"], "");
    assert_eq!(json["url"], "https://google.com/maps?daddr=");
    Ok(())
}
