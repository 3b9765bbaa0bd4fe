//! Standalone HTML export: one card per entry with a colored interval
//! table, the nearest offline equivalent of the original web view.

use crate::core::view::EntryView;
use crate::errors::AppResult;
use crate::render::EMPTY_BODY;
use chrono::Local;
use std::path::Path;

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 56rem; color: #222; }
h1 { font-size: 1.4rem; }
.card { border: 1px solid #ccc; border-radius: 6px; padding: 1rem 1.25rem; margin-bottom: 1.5rem; }
.card h2 { margin: 0 0 .25rem 0; font-size: 1.1rem; }
.badge { background: #eee; border-radius: 4px; padding: 0 .4rem; font-size: .8rem; color: #555; }
.card p.desc { color: #555; font-style: italic; margin: .25rem 0 .75rem 0; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: .3rem .5rem; text-align: left; font-size: .9rem; }
.swatch { display: inline-block; width: .8rem; height: .8rem; border-radius: 2px; margin-right: .4rem; vertical-align: middle; }
.empty { color: #888; font-style: italic; }
footer { color: #888; font-size: .8rem; margin-top: 2rem; }
"#;

pub fn write_html(path: &Path, views: &[EntryView]) -> AppResult<()> {
    let cards: String = views.iter().map(card).collect();
    let page = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Lithology logs</title>
<style>{css}</style>
</head>
<body>
<h1>Lithology logs</h1>
{cards}
<footer>Generated by lithoview on {date}</footer>
</body>
</html>
"#,
        css = CSS,
        cards = cards,
        date = Local::now().format("%Y-%m-%d %H:%M"),
    );
    std::fs::write(path, page)?;
    Ok(())
}

fn card(view: &EntryView) -> String {
    let mut out = String::from("<div class=\"card\">\n");

    out.push_str(&format!("<h2>{}", html_escape(&view.title)));
    if !view.tab_name.trim().is_empty() {
        out.push_str(&format!(
            " <span class=\"badge\">{}</span>",
            html_escape(&view.tab_name)
        ));
    }
    out.push_str("</h2>\n");

    if !view.description.trim().is_empty() {
        out.push_str(&format!(
            "<p class=\"desc\">{}</p>\n",
            html_escape(view.description.trim())
        ));
    }

    if let Some(url) = &view.pdf_url {
        out.push_str(&format!(
            "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener\">PDF profile</a></p>\n",
            html_escape(url)
        ));
    }

    if view.intervals.is_empty() {
        out.push_str(&format!("<p class=\"empty\">{EMPTY_BODY}</p>\n"));
    } else {
        out.push_str("<table>\n<tr><th>From</th><th>To</th><th>Lithology</th><th>Description</th></tr>\n");
        for iv in &view.intervals {
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td><span class=\"swatch\" style=\"background:{}\"></span>{}</td><td>{}</td></tr>\n",
                html_escape(&iv.from_text),
                html_escape(&iv.to_text),
                iv.lithology.hex(),
                html_escape(iv.lithology.name),
                html_escape(&iv.description),
            ));
        }
        out.push_str("</table>\n");
    }

    out.push_str("</div>\n");
    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
