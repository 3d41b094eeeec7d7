//! Conversions between drawing progress and stroke dash offset.
//!
//! Progress `0` is a fully undrawn path (offset equals the path length), progress `1` is fully
//! drawn (offset `0`). Neither direction clamps.

const PROGRESS_DECIMALS: i32 = 6;

/// Dash offset that shows `progress` of a path of `length`.
pub fn progress_to_offset(progress: f64, length: f64) -> f64 {
    length - progress * length
}

/// Progress shown by `offset`, rounded to six decimals so read-modify-read cycles stay stable.
pub fn offset_to_progress(offset: f64, length: f64) -> f64 {
    round_decimals(1.0 - offset / length, PROGRESS_DECIMALS)
}

fn round_decimals(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

#[cfg(test)]
#[path = "../../tests/unit/path/offset.rs"]
mod tests;
