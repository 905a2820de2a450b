//! Core value objects and pure helpers for the zipscout pipeline.
//!
//! Everything in this crate is synchronous and side-effect free (apart from
//! warnings logged while filtering zip codes): the record type carried from
//! the search clients to the CSV writer, zip-code validation, the
//! miles-to-meters conversion, and the final dedup/ordering pass.

pub mod record;
pub mod units;
pub mod zip;

pub use record::{dedup_by_place_id, sort_for_output, PlaceRecord};
pub use units::{miles_to_meters, render_meters, METERS_PER_MILE};
pub use zip::{is_valid_zip, parse_zip_list};
