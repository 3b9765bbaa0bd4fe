use super::depth::DepthValue;
use serde::{Deserialize, Serialize};

/// One depth-bounded lithology observation within a log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub from_depth: DepthValue, // ⇔ sections[].from_depth (number | string | null)
    #[serde(default)]
    pub to_depth: DepthValue, // ⇔ sections[].to_depth (number | string | null)
    #[serde(default)]
    pub description: Option<String>, // ⇔ sections[].description (string | null)
}

impl Section {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// One source log (a workbook tab) with its metadata and ordered sections.
/// Section order is kept exactly as received; the API already serves the
/// intervals in depth order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tab_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pdf_filename: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl LogEntry {
    /// Compose the URL of the linked PDF profile under the fixed `/pdfs/`
    /// prefix of the server base. The file name is URL-escaped; whether the
    /// file actually exists server-side is not our problem.
    pub fn pdf_url(&self, base_url: &str) -> Option<String> {
        if self.pdf_filename.trim().is_empty() {
            return None;
        }
        Some(format!(
            "{}/pdfs/{}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(&self.pdf_filename)
        ))
    }
}
