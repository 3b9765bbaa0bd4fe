//! Discard rules applied to the fetched catalog before display.

use crate::models::{LogEntry, Section};

/// A section is usable when it has either description text or at least one
/// non-blank depth bound. Blank depths include the value zero (see
/// [`crate::models::DepthValue::is_blank`]).
pub fn section_is_usable(section: &Section) -> bool {
    !section.description_text().trim().is_empty()
        || !section.from_depth.is_blank()
        || !section.to_depth.is_blank()
}

/// Drop unusable sections from each entry, then drop entries left with no
/// sections at all. Section order within an entry is preserved; nothing is
/// deduplicated or merged.
pub fn retain_usable(entries: Vec<LogEntry>) -> Vec<LogEntry> {
    entries
        .into_iter()
        .filter_map(|mut entry| {
            entry.sections.retain(section_is_usable);
            if entry.sections.is_empty() {
                None
            } else {
                Some(entry)
            }
        })
        .collect()
}
