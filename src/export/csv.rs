use crate::core::view::EntryView;
use crate::errors::{AppError, AppResult};
use csv::Writer;
use std::path::Path;

/// Write one CSV row per interval, entries flattened in catalog order.
pub fn write_csv(path: &Path, views: &[EntryView]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(["title", "tab_name", "from", "to", "lithology", "description"])
        .map_err(|e| AppError::Export(e.to_string()))?;

    for view in views {
        for iv in &view.intervals {
            wtr.write_record([
                view.title.as_str(),
                view.tab_name.as_str(),
                iv.from_text.as_str(),
                iv.to_text.as_str(),
                iv.lithology.name,
                iv.description.as_str(),
            ])
            .map_err(|e| AppError::Export(e.to_string()))?;
        }
    }

    wtr.flush()?;
    Ok(())
}
