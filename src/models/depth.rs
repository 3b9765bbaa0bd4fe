use serde::{Deserialize, Serialize};

/// A depth bound as it arrives from the API: the workbook export is loose,
/// so a value may be a JSON number, a string (numeric or free text), or
/// missing/null altogether.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepthValue {
    /// Field absent or explicit null.
    #[default]
    Missing,
    Number(f64),
    Text(String),
}

impl DepthValue {
    /// Numeric reading of the value, if there is one.
    /// Textual values are trimmed and parsed; `"4,5"` style comma decimals
    /// are NOT normalized and read as non-numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DepthValue::Missing => None,
            DepthValue::Number(n) => Some(*n),
            DepthValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// True when the value carries no usable depth for the discard rule:
    /// missing, empty text, or zero. Zero counts as blank here, so a
    /// section starting at the surface with no description is dropped,
    /// matching the system this tool replaces.
    pub fn is_blank(&self) -> bool {
        match self {
            DepthValue::Missing => true,
            DepthValue::Number(n) => *n == 0.0,
            DepthValue::Text(s) => {
                let t = s.trim();
                t.is_empty() || t.parse::<f64>().is_ok_and(|n| n == 0.0)
            }
        }
    }
}
