//! The search pipeline: validate zips, geocode each, fan the places search
//! out over them sequentially, then aggregate, dedup, sort, and write.
//!
//! Per-zip failures are logged and skipped rather than propagated so a single
//! bad zip code does not abort the full run.

use std::path::PathBuf;

use zipscout_core::{
    dedup_by_place_id, miles_to_meters, parse_zip_list, render_meters, sort_for_output, PlaceRecord,
};
use zipscout_places::{GoogleMapsClient, SearchAnchor, SearchMode};

use crate::output;

/// Per-request timeout. Generous because a places page under load can be
/// slow and there is no retry.
const REQUEST_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("zipscout/", env!("CARGO_PKG_VERSION"));

/// Pause before a continuation token is used. The provider returns the token
/// eagerly but activates it asynchronously; tokens used too early are
/// rejected.
const PAGE_TOKEN_DELAY_MS: u64 = 2000;

/// Parsed configuration for one run.
pub(crate) struct RunConfig {
    pub api_key: String,
    pub zips: String,
    pub radius_miles: u32,
    pub mode: SearchMode,
    pub output: PathBuf,
}

/// Builds the production client and executes the run.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed or the output
/// file cannot be written. Remote failures are handled per zip and never
/// surface here.
pub(crate) async fn run(config: RunConfig) -> anyhow::Result<()> {
    let client = GoogleMapsClient::new(
        &config.api_key,
        REQUEST_TIMEOUT_SECS,
        USER_AGENT,
        PAGE_TOKEN_DELAY_MS,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Google Maps client: {e}"))?;

    run_with_client(&client, &config).await
}

/// Drives the full pipeline with a caller-supplied client. Split from [`run`]
/// so tests can aim the client at a local mock server.
pub(crate) async fn run_with_client(
    client: &GoogleMapsClient,
    config: &RunConfig,
) -> anyhow::Result<()> {
    let radius_meters = render_meters(miles_to_meters(config.radius_miles));

    let zips = parse_zip_list(&config.zips);
    if zips.is_empty() {
        println!("No valid zip codes found.");
    }

    let mut aggregated: Vec<PlaceRecord> = Vec::new();
    for zip in &zips {
        let location = match client.geocode_zip(zip).await {
            Ok(location) => location,
            Err(err) => {
                tracing::warn!(zip = %zip, error = %err, "geocoding failed — skipping zip");
                continue;
            }
        };

        println!("Searching for results near {zip}...");
        let anchor = SearchAnchor {
            location,
            radius_meters: radius_meters.clone(),
        };
        aggregated.extend(client.search_places(&anchor, &config.mode, zip).await);
    }

    let mut results = dedup_by_place_id(aggregated);
    sort_for_output(&mut results);

    for result in &results {
        println!(
            "Name: {}, Address: {}, Phone: {}, Website: {}",
            result.name,
            result.formatted_address,
            result.phone_number.as_deref().unwrap_or(""),
            result.website.as_deref().unwrap_or("")
        );
    }

    output::write_csv(&config.output, &results)?;

    println!("Total results: {}", results.len());
    println!("Data written to {}", config.output.display());

    Ok(())
}
