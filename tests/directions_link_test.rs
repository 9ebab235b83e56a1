use anyhow::Result;
use map_link::{
    AddressQueryFormatter, AddressRecord, CountryNameTable, DirectionsLink, MapLink,
    MapLinkError, StandardCountries, UnmappedCountryPolicy,
};
use std::collections::HashMap;

fn gb_table() -> HashMap<String, String> {
    HashMap::from([("GB".to_string(), "United Kingdom".to_string())])
}

fn baker_street() -> AddressRecord {
    AddressRecord {
        line1: Some("221B Baker Street".to_string()),
        locality: Some("London".to_string()),
        postal_code: Some("NW1 6XE".to_string()),
        country_code: Some("GB".to_string()),
        ..Default::default()
    }
}

fn full_address() -> AddressRecord {
    AddressRecord {
        line1: Some("L1".to_string()),
        line2: Some("L2".to_string()),
        locality: Some("LOC".to_string()),
        administrative_area: Some("ADM".to_string()),
        dependent_locality: Some("DEP".to_string()),
        postal_code: Some("PC".to_string()),
        country_code: Some("GB".to_string()),
    }
}

#[test]
fn test_baker_street_query_and_url() -> Result<()> {
    let google = DirectionsLink::google(UnmappedCountryPolicy::Fail);

    let query = google.formatter().format_query(&baker_street(), &gb_table())?;
    assert_eq!(query, "221B Baker Street London NW1 6XE United Kingdom");

    let url = google.address_url(&baker_street(), &gb_table())?;
    assert_eq!(
        url.as_str(),
        "https://google.com/maps?daddr=221B+Baker+Street+London+NW1+6XE+United+Kingdom"
    );
    Ok(())
}

#[test]
fn test_empty_address() -> Result<()> {
    let google = DirectionsLink::google(UnmappedCountryPolicy::Fail);
    let empty = AddressRecord {
        line2: Some(String::new()),
        postal_code: Some(String::new()),
        ..Default::default()
    };

    assert_eq!(google.formatter().format_query(&empty, &gb_table())?, "");
    assert_eq!(
        google.address_url(&empty, &gb_table())?.as_str(),
        "https://google.com/maps?daddr="
    );
    Ok(())
}

/// Every subset of fields keeps the fixed component order.
#[test]
fn test_field_order_for_every_subset() -> Result<()> {
    let formatter = AddressQueryFormatter::default();
    let full = full_address();
    let labels = ["L1", "L2", "LOC", "ADM", "DEP", "PC", "United Kingdom"];

    for mask in 0u32..(1 << labels.len()) {
        let keep = |bit: usize, value: &Option<String>| {
            if mask & (1 << bit) != 0 {
                value.clone()
            } else {
                None
            }
        };
        let address = AddressRecord {
            line1: keep(0, &full.line1),
            line2: keep(1, &full.line2),
            locality: keep(2, &full.locality),
            administrative_area: keep(3, &full.administrative_area),
            dependent_locality: keep(4, &full.dependent_locality),
            postal_code: keep(5, &full.postal_code),
            country_code: keep(6, &full.country_code),
        };
        let expected: Vec<&str> = labels
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, label)| *label)
            .collect();

        assert_eq!(formatter.format_query(&address, &gb_table())?, expected.join(" "));
    }
    Ok(())
}

#[test]
fn test_formatting_is_repeatable() -> Result<()> {
    let formatter = AddressQueryFormatter::default();
    let first = formatter.format_query(&full_address(), &StandardCountries)?;
    let second = formatter.format_query(&full_address(), &StandardCountries)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_unmapped_country_fail_policy() {
    let address = AddressRecord {
        country_code: Some("XX".to_string()),
        ..baker_street()
    };
    let google = DirectionsLink::google(UnmappedCountryPolicy::Fail);

    let err = google.address_url(&address, &StandardCountries).unwrap_err();
    match err {
        MapLinkError::MissingCountryMapping { code } => assert_eq!(code, "XX"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unmapped_country_omit_policy() -> Result<()> {
    let address = AddressRecord {
        country_code: Some("XX".to_string()),
        ..baker_street()
    };
    let google = DirectionsLink::google(UnmappedCountryPolicy::Omit);

    let url = google.address_url(&address, &StandardCountries)?;
    assert_eq!(
        url.as_str(),
        "https://google.com/maps?daddr=221B+Baker+Street+London+NW1+6XE"
    );
    Ok(())
}

#[test]
fn test_reserved_characters_are_encoded() -> Result<()> {
    let address = AddressRecord {
        line1: Some("Rue de l'Église 4 & 5".to_string()),
        locality: Some("Genève".to_string()),
        country_code: Some("CH".to_string()),
        ..Default::default()
    };
    let table: &dyn CountryNameTable = &StandardCountries;
    let url = DirectionsLink::google(UnmappedCountryPolicy::Fail).address_url(&address, table)?;

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![(
            "daddr".to_string(),
            "Rue de l'Église 4 & 5 Genève Switzerland".to_string()
        )]
    );
    assert!(!url.as_str().contains('&'));
    Ok(())
}
