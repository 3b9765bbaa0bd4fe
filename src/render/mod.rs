//! Terminal rendering of entry cards.
//!
//! The two layouts are alternative bindings over the same
//! [`EntryView`](crate::core::view::EntryView); picking one is a display
//! option, not a different pipeline.

pub mod strip;
pub mod table;

use crate::core::view::EntryView;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{BOLD, GREY, ITALIC, RESET};
use clap::ValueEnum;

/// Line shown when an entry has no usable intervals.
pub const EMPTY_BODY: &str = "(no interval data)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    Table,
    Strip,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Table => "table",
            Layout::Strip => "strip",
        }
    }

    /// Parse a layout name from the config file.
    pub fn from_name(name: &str) -> AppResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "table" => Ok(Layout::Table),
            "strip" => Ok(Layout::Strip),
            other => Err(AppError::InvalidLayout(other.to_string())),
        }
    }
}

pub struct RenderOptions {
    /// ANSI colors on/off (`--plain` turns them off).
    pub color: bool,
    /// Target total band rows for the strip layout.
    pub strip_height: usize,
}

/// Render one card: metadata header plus the selected body layout.
pub fn render_entry(view: &EntryView, layout: Layout, opts: &RenderOptions) -> String {
    let mut out = header(view, opts);
    let body = match layout {
        Layout::Table => table::render(view, opts),
        Layout::Strip => strip::render(view, opts),
    };
    out.push_str(&body);
    out
}

fn header(view: &EntryView, opts: &RenderOptions) -> String {
    let mut out = String::new();

    let title = if view.title.trim().is_empty() {
        "(untitled log)"
    } else {
        view.title.trim()
    };
    if opts.color {
        out.push_str(&format!("{BOLD}{title}{RESET}"));
        if !view.tab_name.trim().is_empty() {
            out.push_str(&format!("  {GREY}[{}]{RESET}", view.tab_name.trim()));
        }
    } else {
        out.push_str(title);
        if !view.tab_name.trim().is_empty() {
            out.push_str(&format!("  [{}]", view.tab_name.trim()));
        }
    }
    out.push('\n');

    if !view.description.trim().is_empty() {
        for line in textwrap::wrap(view.description.trim(), 76) {
            if opts.color {
                out.push_str(&format!("{ITALIC}{line}{RESET}\n"));
            } else {
                out.push_str(&line);
                out.push('\n');
            }
        }
    }

    if let Some(url) = &view.pdf_url {
        out.push_str(&format!("PDF: {url}\n"));
    }

    out.push('\n');
    out
}
