use crate::core::loader::{LoadOutcome, load};
use crate::core::view::build_views;
use crate::errors::AppResult;
use crate::export::{ExportFormat, csv, fs_utils, html, json, notify_export_success};
use crate::ui::messages::warning;
use crate::utils::path::{ensure_parent_dir, expand_tilde};

pub struct ExportLogic;

impl ExportLogic {
    /// Fetch the catalog and write it to `file` in the requested format.
    ///
    /// The loader's empty states apply here too: nothing to display means
    /// nothing to export, so a warning is printed and no file is written.
    pub fn export(
        url: &str,
        pdf_base_url: &str,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let entries = match load(url)? {
            LoadOutcome::Success(entries) => entries,
            LoadOutcome::Empty(reason) => {
                warning(format!("{} Nothing to export.", reason.message()));
                return Ok(());
            }
        };

        let path = expand_tilde(file);
        fs_utils::ensure_writable(&path, force)?;
        ensure_parent_dir(&path)?;

        match format {
            ExportFormat::Json => {
                json::write_json(&path, &entries)?;
                notify_export_success("JSON", &path);
            }
            ExportFormat::Csv => {
                let views = build_views(&entries, pdf_base_url);
                csv::write_csv(&path, &views)?;
                notify_export_success("CSV", &path);
            }
            ExportFormat::Html => {
                let views = build_views(&entries, pdf_base_url);
                html::write_html(&path, &views)?;
                notify_export_success("HTML", &path);
            }
        }

        Ok(())
    }
}
