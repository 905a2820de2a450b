pub mod client;
pub mod error;
pub mod search;
pub mod types;

pub use client::GoogleMapsClient;
pub use error::PlacesError;
pub use search::{SearchAnchor, SearchMode};
pub use types::{GeoLocation, Place, SearchResponse};
