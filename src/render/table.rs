//! Tabular layout: one row per interval.

use crate::core::view::EntryView;
use crate::render::{EMPTY_BODY, RenderOptions};
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

pub fn render(view: &EntryView, opts: &RenderOptions) -> String {
    if view.intervals.is_empty() {
        return format!("  {EMPTY_BODY}\n");
    }

    let mut table = Table::new(vec![
        Column::new("From"),
        Column::new("To"),
        Column::new("Lithology"),
        Column::new("Description"),
    ]);

    for iv in &view.intervals {
        let (r, g, b) = iv.lithology.rgb;
        let lith_cell = if opts.color {
            format!(
                "{} {}",
                Colour::RGB(r, g, b).paint("■"),
                iv.lithology.name
            )
        } else {
            format!("■ {}", iv.lithology.name)
        };

        let (from_cell, to_cell) = if opts.color {
            (
                colorize_optional(&iv.from_text),
                colorize_optional(&iv.to_text),
            )
        } else {
            (iv.from_text.clone(), iv.to_text.clone())
        };

        table.add_row(vec![from_cell, to_cell, lith_cell, iv.description.clone()]);
    }

    table.render()
}
