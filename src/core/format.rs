//! Depth text formatting and interval sizing.

use crate::models::DepthValue;

/// Placeholder shown for absent depth values.
pub const DEPTH_PLACEHOLDER: &str = "—";

/// Unit suffix appended to numeric depths.
pub const DEPTH_UNIT: &str = " m";

/// Weight of an interval whose bounds coincide.
const ZERO_THICKNESS_WEIGHT: f64 = 0.5;

/// Weight of an interval with a missing or inverted bound.
const DEFAULT_WEIGHT: f64 = 1.0;

/// Human-readable depth text.
///
/// Numbers render with at most two decimals, trailing zeros trimmed, plus
/// the meter suffix (`3` → `"3 m"`, `3.10` → `"3.1 m"`). Non-numeric text
/// is returned verbatim and gets NO unit suffix; the upstream data carries
/// remarks like `"below casing"` in depth cells and those must pass
/// through untouched.
pub fn format_depth(value: &DepthValue) -> String {
    match value {
        DepthValue::Missing => DEPTH_PLACEHOLDER.to_string(),
        DepthValue::Number(n) => format!("{}{}", format_number(*n), DEPTH_UNIT),
        DepthValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                DEPTH_PLACEHOLDER.to_string()
            } else if let Ok(n) = trimmed.parse::<f64>() {
                format!("{}{}", format_number(n), DEPTH_UNIT)
            } else {
                s.clone()
            }
        }
    }
}

/// Two decimals max, trailing zeros and a dangling point trimmed.
fn format_number(n: f64) -> String {
    let text = format!("{:.2}", n);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Proportional weight of an interval in the log strip.
///
/// A positive thickness is used as-is; a zero thickness gets a fixed small
/// weight so the band stays visible; anything else (missing bound,
/// inverted interval) falls back to the default weight.
pub fn interval_size(from: Option<f64>, to: Option<f64>) -> f64 {
    match (from, to) {
        (Some(a), Some(b)) => {
            let diff = b - a;
            if diff > 0.0 {
                diff
            } else if diff == 0.0 {
                ZERO_THICKNESS_WEIGHT
            } else {
                DEFAULT_WEIGHT
            }
        }
        _ => DEFAULT_WEIGHT,
    }
}
