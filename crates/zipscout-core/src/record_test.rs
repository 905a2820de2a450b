use super::*;

/// Helper: a record with the given id, zip, and name; other fields filled
/// with recognisable noise.
fn record(place_id: &str, search_zip: &str, name: &str) -> PlaceRecord {
    PlaceRecord {
        name: name.to_string(),
        formatted_address: format!("{name} St, Somewhere, USA"),
        phone_number: Some("(555) 555-0100".to_string()),
        website: None,
        search_zip: search_zip.to_string(),
        place_id: place_id.to_string(),
    }
}

// ---------------------------------------------------------------------------
// dedup_by_place_id
// ---------------------------------------------------------------------------

#[test]
fn dedup_keeps_first_occurrence() {
    let records = vec![
        record("A", "90210", "Alpha Cabinets"),
        record("B", "90210", "Beta Cabinets"),
        record("A", "10001", "Alpha Cabinets NYC"),
    ];

    let deduped = dedup_by_place_id(records);
    assert_eq!(deduped.len(), 2);
    assert_eq!(deduped[0].place_id, "A");
    assert_eq!(
        deduped[0].search_zip, "90210",
        "first occurrence wins on collision"
    );
    assert_eq!(deduped[1].place_id, "B");
}

#[test]
fn dedup_of_distinct_ids_is_identity() {
    let records = vec![
        record("A", "90210", "Alpha"),
        record("B", "90210", "Beta"),
        record("C", "10001", "Gamma"),
    ];
    let deduped = dedup_by_place_id(records.clone());
    assert_eq!(deduped, records);
}

#[test]
fn dedup_of_empty_list_is_empty() {
    assert!(dedup_by_place_id(vec![]).is_empty());
}

#[test]
fn dedup_contains_each_place_id_at_most_once() {
    let records = vec![
        record("X", "90210", "One"),
        record("X", "90210", "Two"),
        record("X", "10001", "Three"),
        record("Y", "10001", "Four"),
        record("Y", "90210", "Five"),
    ];

    let deduped = dedup_by_place_id(records);
    let mut ids: Vec<&str> = deduped.iter().map(|r| r.place_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), deduped.len(), "every place_id appears once");
}

// ---------------------------------------------------------------------------
// sort_for_output
// ---------------------------------------------------------------------------

#[test]
fn sorts_by_zip_then_name() {
    let mut records = vec![
        record("1", "90210", "Zenith Woodworks"),
        record("2", "10001", "Midtown Millwork"),
        record("3", "90210", "Alpha Cabinets"),
        record("4", "10001", "Atlas Joinery"),
    ];

    sort_for_output(&mut records);

    let keys: Vec<(&str, &str)> = records
        .iter()
        .map(|r| (r.search_zip.as_str(), r.name.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("10001", "Atlas Joinery"),
            ("10001", "Midtown Millwork"),
            ("90210", "Alpha Cabinets"),
            ("90210", "Zenith Woodworks"),
        ]
    );
}

#[test]
fn sort_is_non_decreasing_in_both_keys() {
    let mut records = vec![
        record("1", "60601", "B"),
        record("2", "60601", "A"),
        record("3", "30301", "C"),
        record("4", "99501", "A"),
        record("5", "30301", "A"),
    ];
    sort_for_output(&mut records);

    for pair in records.windows(2) {
        let a = (&pair[0].search_zip, &pair[0].name);
        let b = (&pair[1].search_zip, &pair[1].name);
        assert!(a <= b, "{a:?} should not sort after {b:?}");
    }
}

#[test]
fn sort_preserves_provider_order_on_full_tie() {
    let mut first = record("1", "90210", "Same Name");
    first.formatted_address = "1 First St".to_string();
    let mut second = record("2", "90210", "Same Name");
    second.formatted_address = "2 Second St".to_string();

    let mut records = vec![first, second];
    sort_for_output(&mut records);

    assert_eq!(records[0].place_id, "1");
    assert_eq!(records[1].place_id, "2");
}

// ---------------------------------------------------------------------------
// serde field names (CSV header contract)
// ---------------------------------------------------------------------------

#[test]
fn serializes_with_pascal_case_column_names_in_declaration_order() {
    let json = serde_json::to_string(&record("abc", "90210", "Alpha")).expect("serializable");

    let expected = [
        "\"Name\"",
        "\"FormattedAddress\"",
        "\"PhoneNumber\"",
        "\"Website\"",
        "\"SearchZip\"",
        "\"PlaceId\"",
    ];
    let positions: Vec<usize> = expected
        .iter()
        .map(|key| json.find(key).unwrap_or_else(|| panic!("{key} missing from {json}")))
        .collect();
    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "fields must serialize in CSV column order, got: {json}"
    );
}
