//! The `show` command: fetch, filter, classify and render the catalog.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::loader::{LoadOutcome, load};
use crate::core::view::build_views;
use crate::errors::AppResult;
use crate::render::{Layout, RenderOptions, render_entry};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::separator;
use crate::utils::pluralize;

const CARD_WIDTH: usize = 78;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        layout,
        entry,
        height,
        plain,
    } = cmd
    {
        let layout = match layout {
            Some(l) => *l,
            None => Layout::from_name(&cfg.layout)?,
        };
        let opts = RenderOptions {
            color: !plain,
            strip_height: height.unwrap_or(cfg.strip_height),
        };

        info(format!("Loading lithology logs from {} …", cfg.api_url));

        let mut entries = match load(&cfg.api_url)? {
            LoadOutcome::Empty(reason) => {
                warning(reason.message());
                return Ok(());
            }
            LoadOutcome::Success(entries) => entries,
        };

        if let Some(wanted) = entry {
            entries.retain(|e| {
                e.tab_name.eq_ignore_ascii_case(wanted) || e.title.eq_ignore_ascii_case(wanted)
            });
            if entries.is_empty() {
                warning(format!("No log matches '{}'.", wanted));
                return Ok(());
            }
        }

        let views = build_views(&entries, &cfg.pdf_base_url);
        success(format!("Loaded {}.", pluralize(views.len(), "log", "logs")));
        println!();

        let divider = separator(&cfg.separator_char, CARD_WIDTH);
        for (i, view) in views.iter().enumerate() {
            if i > 0 {
                if opts.color {
                    println!("{GREY}{divider}{RESET}\n");
                } else {
                    println!("{divider}\n");
                }
            }
            print!("{}", render_entry(view, layout, &opts));
            println!();
        }
    }
    Ok(())
}
