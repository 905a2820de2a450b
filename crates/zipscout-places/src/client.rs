use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use zipscout_core::PlaceRecord;

use crate::error::PlacesError;
use crate::search::{
    NearbySearchRequest, SearchAnchor, SearchMode, TextSearchRequest, NEARBY_SEARCH_FIELD_MASK,
    TEXT_SEARCH_FIELD_MASK,
};
use crate::types::{GeoLocation, GeocodeResponse, SearchResponse};

/// Maximum number of pages to fetch for a single text search.
/// Prevents infinite loops on cycling continuation tokens.
const MAX_PAGES: usize = 20;

const DEFAULT_GEOCODE_BASE: &str = "https://maps.googleapis.com";
const DEFAULT_PLACES_BASE: &str = "https://places.googleapis.com";

/// HTTP client for the Google Geocoding API and the Places API (New) search
/// endpoints.
///
/// One instance is built per run and reused for every request; connection
/// pooling is the underlying `reqwest::Client`'s concern. All calls are
/// sequential — the pipeline never holds two requests in flight.
///
/// Geocoding failures surface as typed errors so the caller can skip the
/// affected zip code. Places page failures are absorbed by
/// [`Self::search_places`], which returns whatever records were accumulated
/// before the failure.
pub struct GoogleMapsClient {
    http: Client,
    api_key: String,
    geocode_base: String,
    places_base: String,
    /// Wall-clock pause before a continuation token is used. The provider
    /// returns `nextPageToken` eagerly but activates it asynchronously.
    page_token_delay: Duration,
}

impl GoogleMapsClient {
    /// Creates a client with the production endpoint bases.
    ///
    /// `page_token_delay_ms` is the pause inserted before every continuation
    /// request of a text search; pass the production value of 2000 ms, or a
    /// small value in tests.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        page_token_delay_ms: u64,
    ) -> Result<Self, PlacesError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.to_string(),
            geocode_base: DEFAULT_GEOCODE_BASE.to_string(),
            places_base: DEFAULT_PLACES_BASE.to_string(),
            page_token_delay: Duration::from_millis(page_token_delay_ms),
        })
    }

    /// Overrides the geocoding endpoint base (scheme + host).
    #[must_use]
    pub fn with_geocode_base(mut self, base: &str) -> Self {
        self.geocode_base = base.trim_end_matches('/').to_string();
        self
    }

    /// Overrides the places endpoint base (scheme + host).
    #[must_use]
    pub fn with_places_base(mut self, base: &str) -> Self {
        self.places_base = base.trim_end_matches('/').to_string();
        self
    }

    /// Resolves a zip code to a coordinate via the Geocoding API.
    ///
    /// # Errors
    ///
    /// Every failure is soft from the pipeline's point of view — the caller
    /// logs it and moves on to the next zip code:
    /// - [`PlacesError::Http`] — transport failure.
    /// - [`PlacesError::UnexpectedStatus`] — non-2xx response.
    /// - [`PlacesError::GeocodeStatus`] — 2xx with a non-`OK` service status
    ///   (e.g. `ZERO_RESULTS`, `REQUEST_DENIED`).
    /// - [`PlacesError::GeocodeEmpty`] — `OK` status with an empty result set.
    /// - [`PlacesError::Deserialize`] — body is not the documented shape.
    pub async fn geocode_zip(&self, zip: &str) -> Result<GeoLocation, PlacesError> {
        let url = format!("{}/maps/api/geocode/json", self.geocode_base);
        let response = self
            .http
            .get(&url)
            .query(&[("address", zip), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                url,
                body,
            });
        }

        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: format!("geocode response for zip {zip}"),
                source: e,
            })?;

        if parsed.status != "OK" {
            return Err(PlacesError::GeocodeStatus {
                zip: zip.to_string(),
                status: parsed.status,
            });
        }

        parsed
            .results
            .into_iter()
            .next()
            .map(|result| result.geometry.location)
            .ok_or_else(|| PlacesError::GeocodeEmpty {
                zip: zip.to_string(),
            })
    }

    /// Runs the full places search for one zip code and returns the records
    /// in provider order.
    ///
    /// Text mode walks continuation tokens until the provider stops issuing
    /// them; typed mode issues exactly one request. Page failures terminate
    /// the stream and are logged, not propagated — the records accumulated
    /// before the failure are returned.
    pub async fn search_places(
        &self,
        anchor: &SearchAnchor,
        mode: &SearchMode,
        search_zip: &str,
    ) -> Vec<PlaceRecord> {
        match mode {
            SearchMode::Text { keyword } => self.run_text_search(anchor, keyword, search_zip).await,
            SearchMode::Typed { types } => self.run_nearby_search(anchor, types, search_zip).await,
        }
    }

    /// Fetches one page of a text search.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] — transport failure.
    /// - [`PlacesError::UnexpectedStatus`] — non-2xx response; carries the
    ///   response body for the caller to log.
    /// - [`PlacesError::Deserialize`] — 2xx body that does not parse.
    pub async fn fetch_text_search_page(
        &self,
        anchor: &SearchAnchor,
        keyword: &str,
        page_token: Option<&str>,
    ) -> Result<SearchResponse, PlacesError> {
        let url = format!("{}/v1/places:searchText", self.places_base);
        let request = TextSearchRequest::new(anchor, keyword, page_token);
        self.post_search(&url, TEXT_SEARCH_FIELD_MASK, &request, "text search page")
            .await
    }

    /// Fetches the single page of a nearby (typed) search.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::fetch_text_search_page`].
    pub async fn fetch_nearby_search(
        &self,
        anchor: &SearchAnchor,
        types: &[String],
    ) -> Result<SearchResponse, PlacesError> {
        let url = format!("{}/v1/places:searchNearby", self.places_base);
        let request = NearbySearchRequest::new(anchor, types);
        self.post_search(&url, NEARBY_SEARCH_FIELD_MASK, &request, "nearby search")
            .await
    }

    async fn run_text_search(
        &self,
        anchor: &SearchAnchor,
        keyword: &str,
        search_zip: &str,
    ) -> Vec<PlaceRecord> {
        let mut records: Vec<PlaceRecord> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                tracing::warn!(
                    zip = search_zip,
                    max_pages = MAX_PAGES,
                    "stopping text search — page limit reached"
                );
                break;
            }

            if page_token.is_some() && !self.page_token_delay.is_zero() {
                tokio::time::sleep(self.page_token_delay).await;
            }

            tracing::info!(zip = search_zip, page = page_count, "fetching search page");
            let page = match self
                .fetch_text_search_page(anchor, keyword, page_token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(err) => {
                    tracing::error!(
                        zip = search_zip,
                        page = page_count,
                        error = %err,
                        "text search page failed — keeping records fetched so far"
                    );
                    break;
                }
            };

            records.extend(
                page.places
                    .into_iter()
                    .filter_map(|place| place.into_record(search_zip)),
            );

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        records
    }

    async fn run_nearby_search(
        &self,
        anchor: &SearchAnchor,
        types: &[String],
        search_zip: &str,
    ) -> Vec<PlaceRecord> {
        match self.fetch_nearby_search(anchor, types).await {
            Ok(page) => page
                .places
                .into_iter()
                .filter_map(|place| place.into_record(search_zip))
                .collect(),
            Err(err) => {
                tracing::error!(zip = search_zip, error = %err, "nearby search failed");
                Vec::new()
            }
        }
    }

    /// POSTs a search body with the common Places headers and parses the
    /// response envelope.
    async fn post_search<T: Serialize>(
        &self,
        url: &str,
        field_mask: &str,
        request: &T,
        context: &str,
    ) -> Result<SearchResponse, PlacesError> {
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .header("x-goog-fieldmask", field_mask)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}
