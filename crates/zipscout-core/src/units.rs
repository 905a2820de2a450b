//! Radius unit conversion.
//!
//! The CLI takes the search radius in integer miles; the Places API wants
//! meters. The converted value is rendered once as a culture-invariant
//! decimal string and carried verbatim into every request body for the run.

/// Conversion factor used by the search pipeline.
pub const METERS_PER_MILE: f64 = 1609.34;

/// Converts a radius in whole miles to meters.
#[must_use]
pub fn miles_to_meters(miles: u32) -> f64 {
    f64::from(miles) * METERS_PER_MILE
}

/// Renders a meter value as a decimal string with a `.` decimal point.
///
/// An integer mile count times 1609.34 has at most two fractional digits;
/// the rendering keeps at least one, so 50 miles becomes `"80467.0"` and
/// 10 miles becomes `"16093.4"`.
#[must_use]
pub fn render_meters(meters: f64) -> String {
    let mut rendered = format!("{meters:.2}");
    if rendered.ends_with('0') {
        rendered.pop();
    }
    rendered
}
