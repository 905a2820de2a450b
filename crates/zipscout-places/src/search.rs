//! Search parameters and the endpoint-specific request bodies rendered from
//! them.
//!
//! The two Places search endpoints take near-identical payloads: `searchText`
//! biases results toward a circle, `searchNearby` restricts them to one.
//! Both shapes are rendered from a single [`SearchAnchor`] at request-build
//! time rather than carried around as separate parameter objects.

use serde::Serialize;

use crate::types::GeoLocation;

/// How a run queries the Places API. Exactly one variant is active per run;
/// the CLI enforces mutual exclusivity before a client is ever constructed.
#[derive(Debug, Clone)]
pub enum SearchMode {
    /// Free-text search against `places:searchText`, paged.
    Text { keyword: String },

    /// Category search against `places:searchNearby`, single-shot.
    Typed { types: Vec<String> },
}

/// The circle a per-zip search is anchored on. Immutable for the lifetime of
/// that search.
#[derive(Debug, Clone)]
pub struct SearchAnchor {
    pub location: GeoLocation,

    /// Radius in meters, pre-rendered as an invariant decimal string and
    /// carried verbatim into each request body. Proto3 JSON accepts
    /// string-encoded doubles.
    pub radius_meters: String,
}

/// Number of places requested per page/request on both endpoints.
pub(crate) const PAGE_SIZE: u32 = 20;

/// Field mask for `searchText` requests; includes `nextPageToken` because
/// this endpoint paginates.
pub(crate) const TEXT_SEARCH_FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,places.nationalPhoneNumber,places.websiteUri,nextPageToken";

/// Field mask for `searchNearby` requests. `searchNearby` does not paginate,
/// so no `nextPageToken`.
pub(crate) const NEARBY_SEARCH_FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,places.nationalPhoneNumber,places.websiteUri";

#[derive(Debug, Serialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Serialize)]
struct Circle<'a> {
    center: LatLng,
    radius: &'a str,
}

#[derive(Debug, Serialize)]
struct CircleArea<'a> {
    circle: Circle<'a>,
}

impl<'a> CircleArea<'a> {
    fn from_anchor(anchor: &'a SearchAnchor) -> Self {
        Self {
            circle: Circle {
                center: LatLng {
                    latitude: anchor.location.lat,
                    longitude: anchor.location.lng,
                },
                radius: &anchor.radius_meters,
            },
        }
    }
}

/// Body of a `places:searchText` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TextSearchRequest<'a> {
    text_query: &'a str,
    page_size: u32,
    location_bias: CircleArea<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

impl<'a> TextSearchRequest<'a> {
    pub(crate) fn new(anchor: &'a SearchAnchor, keyword: &'a str, page_token: Option<&'a str>) -> Self {
        Self {
            text_query: keyword,
            page_size: PAGE_SIZE,
            location_bias: CircleArea::from_anchor(anchor),
            page_token,
        }
    }
}

/// Body of a `places:searchNearby` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NearbySearchRequest<'a> {
    included_types: &'a [String],
    max_result_count: u32,
    location_restriction: CircleArea<'a>,
}

impl<'a> NearbySearchRequest<'a> {
    pub(crate) fn new(anchor: &'a SearchAnchor, types: &'a [String]) -> Self {
        Self {
            included_types: types,
            max_result_count: PAGE_SIZE,
            location_restriction: CircleArea::from_anchor(anchor),
        }
    }
}
