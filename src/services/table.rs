// src/services/table.rs

//! Summary table for the index page.
//!
//! Builds the HTML table listing every configured site with links to its
//! three feed files. The string is substituted verbatim into the index
//! template.

use crate::models::{Config, Site};
use crate::services::FeedFormat;

/// Render the feed summary table for the configured sites.
pub fn render_feed_table(config: &Config) -> String {
    let mut html = String::new();
    html.push_str("<table class=\"feed-table\">\n");
    html.push_str("<thead><tr><th>사이트</th><th>RSS</th><th>Atom</th><th>JSON</th></tr></thead>\n");
    html.push_str("<tbody>\n");

    for site in &config.sites {
        html.push_str(&render_row(&config.generator.feed_root, site));
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

fn render_row(feed_root: &str, site: &Site) -> String {
    let mut row = String::new();
    row.push_str("<tr>");
    row.push_str(&format!(
        "<td><a href=\"{}\">{}</a></td>",
        escape_html(&site.url),
        escape_html(site.display_name()),
    ));
    for format in FeedFormat::ALL {
        row.push_str(&format!(
            "<td><a href=\"/{}/{}/{}\">{}</a></td>",
            feed_root,
            site.key,
            format.file_name(),
            format.file_name(),
        ));
    }
    row.push_str("</tr>\n");
    row
}

/// Escape the characters that would break out of HTML text or attributes.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
