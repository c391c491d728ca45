//!
//! Utility functions.
//!

pub mod ordered_map;

///
/// Checks whether a decimal string holds a finite non-negative number, and returns it.
///
pub fn parse_non_negative(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite() && *number >= 0.0)
}
