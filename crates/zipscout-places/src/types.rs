//! Response types for the Geocoding API and the Places API (New) search
//! endpoints.
//!
//! ## Observed shapes
//!
//! ### Geocoding (`/maps/api/geocode/json`)
//! Always returns HTTP 200 with a top-level `status` string once the request
//! reaches the service; transport-level failures and quota rejections are the
//! only non-2xx cases. `results` is an empty array (not absent) for
//! `ZERO_RESULTS`, but we default it anyway so an unexpected omission cannot
//! fail deserialization. `lat`/`lng` are JSON numbers.
//!
//! ### Places search (`places:searchText`, `places:searchNearby`)
//! The response contains only the fields named in the `x-goog-fieldmask`
//! header. A search with no matches returns `{}` — no `places` key at all —
//! so every field is `#[serde(default)]`. `nextPageToken` appears only on
//! `searchText` responses, and only when a further page exists.

use serde::Deserialize;

use zipscout_core::PlaceRecord;

/// Top-level geocoding response envelope.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    /// Request-level status: `"OK"`, `"ZERO_RESULTS"`, `"REQUEST_DENIED"`, …
    pub status: String,

    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: GeoLocation,
}

/// A latitude/longitude pair in decimal degrees, as returned by the geocoder.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
}

/// One page of results from either places search endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub places: Vec<Place>,

    /// Continuation token for the next page. Only ever present on
    /// `searchText` responses; absent or empty means the stream is done.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A single place as returned under the field mask this client requests.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Provider-assigned stable identifier.
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub display_name: Option<LocalizedText>,

    #[serde(default)]
    pub formatted_address: String,

    /// National-format phone number; omitted when the provider has none.
    #[serde(default)]
    pub national_phone_number: Option<String>,

    /// Business website; omitted when the provider has none.
    #[serde(default)]
    pub website_uri: Option<String>,
}

/// The `displayName` wrapper: a text payload plus a language code we do not
/// request.
#[derive(Debug, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub text: String,
}

impl Place {
    /// Converts an API place into the pipeline's record type, tagged with the
    /// zip code the search was anchored on.
    ///
    /// Returns `None` when the provider omitted the `id`: a record without a
    /// deduplication key is never emitted.
    #[must_use]
    pub fn into_record(self, search_zip: &str) -> Option<PlaceRecord> {
        if self.id.is_empty() {
            tracing::warn!(search_zip, "dropping place without an id");
            return None;
        }

        Some(PlaceRecord {
            name: self.display_name.map(|n| n.text).unwrap_or_default(),
            formatted_address: self.formatted_address,
            phone_number: self.national_phone_number,
            website: self.website_uri,
            search_zip: search_zip.to_string(),
            place_id: self.id,
        })
    }
}
