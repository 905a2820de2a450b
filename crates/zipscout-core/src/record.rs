//! The place record carried through the pipeline, plus the aggregation pass
//! applied before the records reach the CSV writer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single business listing discovered by a places search.
///
/// Constructed by the search client while parsing a page response and never
/// mutated afterwards. The serde renames drive the CSV header row
/// (`Name,FormattedAddress,PhoneNumber,Website,SearchZip,PlaceId`), so field
/// order here is the column order of the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaceRecord {
    /// Display name of the business.
    pub name: String,

    /// Full provider-formatted street address.
    pub formatted_address: String,

    /// National-format phone number. Absent when the provider has none on
    /// file — `None`, never an empty string.
    pub phone_number: Option<String>,

    /// Business website URL, when the provider has one.
    pub website: Option<String>,

    /// The zip code this record was discovered under. Always one of the
    /// validated input zips.
    pub search_zip: String,

    /// Provider-assigned stable identifier; the uniqueness key for
    /// deduplication. Non-empty for every emitted record.
    pub place_id: String,
}

/// Drops every record whose `place_id` was already seen, keeping the first
/// occurrence in its original position.
#[must_use]
pub fn dedup_by_place_id(records: Vec<PlaceRecord>) -> Vec<PlaceRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.place_id.clone()))
        .collect()
}

/// Sorts records by (`search_zip`, `name`), both ascending lexicographic.
///
/// The sort is stable, so records that tie on both keys keep their
/// provider-emitted relative order.
pub fn sort_for_output(records: &mut [PlaceRecord]) {
    records.sort_by(|a, b| {
        (a.search_zip.as_str(), a.name.as_str()).cmp(&(b.search_zip.as_str(), b.name.as_str()))
    });
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
