//! Pure view-model construction.
//!
//! Everything the renderers and the HTML export need is computed here from
//! the models alone, so the layouts stay dumb bindings over one transform.

use crate::core::classify::classify;
use crate::core::format::{format_depth, interval_size};
use crate::models::{LogEntry, Lithology};

/// One renderable interval row.
#[derive(Debug)]
pub struct IntervalView {
    pub from_text: String,
    pub to_text: String,
    pub lithology: &'static Lithology,
    pub description: String,
    pub weight: f64,
    /// Fraction of the entry's total weight, in `0.0..=1.0`.
    pub share: f64,
}

/// One renderable card.
#[derive(Debug)]
pub struct EntryView {
    pub title: String,
    pub tab_name: String,
    pub description: String,
    pub pdf_url: Option<String>,
    pub intervals: Vec<IntervalView>,
}

/// Build the view of a single entry. Weights are recomputed on every call;
/// they are render-time values, never stored.
pub fn build_entry_view(entry: &LogEntry, pdf_base_url: &str) -> EntryView {
    let mut intervals: Vec<IntervalView> = entry
        .sections
        .iter()
        .map(|section| {
            let weight =
                interval_size(section.from_depth.as_number(), section.to_depth.as_number());
            IntervalView {
                from_text: format_depth(&section.from_depth),
                to_text: format_depth(&section.to_depth),
                lithology: classify(section.description.as_deref()),
                description: section.description_text().trim().to_string(),
                weight,
                share: 0.0,
            }
        })
        .collect();

    let mut total: f64 = intervals.iter().map(|iv| iv.weight).sum();
    if total == 0.0 {
        total = intervals.len() as f64;
    }
    if total > 0.0 {
        for iv in &mut intervals {
            iv.share = iv.weight / total;
        }
    }

    EntryView {
        title: entry.title.clone(),
        tab_name: entry.tab_name.clone(),
        description: entry.description.clone(),
        pdf_url: entry.pdf_url(pdf_base_url),
        intervals,
    }
}

/// Build views for the whole catalog.
pub fn build_views(entries: &[LogEntry], pdf_base_url: &str) -> Vec<EntryView> {
    entries
        .iter()
        .map(|entry| build_entry_view(entry, pdf_base_url))
        .collect()
}
