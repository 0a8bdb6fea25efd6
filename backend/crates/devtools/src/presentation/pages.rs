//! HTML Pages
//!
//! The dev endpoints serve small hand-built pages; nothing here warrants a
//! template engine.

use crate::domain::catalog::RouteEntry;
use chrono::{DateTime, Utc};

/// Render the route listing for GET /api/list
pub fn render_api_listing(entries: &[RouteEntry]) -> String {
    let mut rows = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = escape_html(&entry.path);
        let summary = escape_html(&entry.summary);
        let gated = if entry.dev_only { " (dev only)" } else { "" };
        rows.push(format!(
            "<div><a href='{path}'><b>{path}</b></a> [{method}]{gated}<br/>{summary}</div>",
            method = entry.method,
        ));
    }

    let header = format!(
        "<body>\n\
         <style>\n\
             body {{ width: 80%; margin: 20px auto;\n\
                  font-family: Courier; }}\n\
             section {{ background: #eee; padding: 40px 20px;\n\
                 border: 1px dashed #aaa; }}\n\
         </style>\n\
         <section>\n\
         <h2>REST API ({count} end-points)</h2>\n",
        count = entries.len()
    );

    format!("{}{}</section></body>", header, rows.join("<br/>"))
}

/// Render the example page for GET /examplehtml
pub fn render_example_page(clock: DateTime<Utc>) -> String {
    format!(
        "<body>\n\
         <h2>Example page</h2>\n\
         <p>Server clock: {}</p>\n\
         </body>",
        clock.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Minimal HTML escaping for text and attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
