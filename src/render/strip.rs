//! Proportional log strip: a vertical stack of colored bands whose height
//! tracks each interval's share of the entry's total thickness.

use crate::core::view::{EntryView, IntervalView};
use crate::render::{EMPTY_BODY, RenderOptions};
use crate::utils::colors::{GREY, RESET};
use ansi_term::Colour;

const BAND_WIDTH: usize = 10;
const ANNOTATION_WIDTH: usize = 56;

pub fn render(view: &EntryView, opts: &RenderOptions) -> String {
    if view.intervals.is_empty() {
        return format!("  {EMPTY_BODY}\n");
    }

    let mut out = String::new();
    for iv in &view.intervals {
        out.push_str(&band(iv, opts));
    }
    out
}

fn band(iv: &IntervalView, opts: &RenderOptions) -> String {
    let block_plain = "█".repeat(BAND_WIDTH);
    let (r, g, b) = iv.lithology.rgb;
    let block = if opts.color {
        Colour::RGB(r, g, b).paint(block_plain.as_str()).to_string()
    } else {
        block_plain.clone()
    };

    // Annotations: depth range + lithology label first, wrapped description
    // below. The band is at least tall enough to hold them.
    let range = format!("{} – {}", iv.from_text, iv.to_text);
    let mut annotations = vec![if opts.color {
        format!("{range}  {}", Colour::RGB(r, g, b).bold().paint(iv.lithology.name))
    } else {
        format!("{range}  {}", iv.lithology.name)
    }];
    if !iv.description.is_empty() {
        for line in textwrap::wrap(&iv.description, ANNOTATION_WIDTH) {
            if opts.color {
                annotations.push(format!("{GREY}{line}{RESET}"));
            } else {
                annotations.push(line.into_owned());
            }
        }
    }

    let proportional = (iv.share * opts.strip_height as f64).round() as usize;
    let rows = proportional.max(1).max(annotations.len());

    let mut out = String::new();
    for row in 0..rows {
        match annotations.get(row) {
            Some(text) => out.push_str(&format!("{block}  {text}\n")),
            None => out.push_str(&format!("{block}\n")),
        }
    }
    out
}
