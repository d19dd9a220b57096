//! Line-based conversion of generated itinerary text into HTML.

use std::fmt;

/// Markup produced from itinerary text. Only headings and paragraphs appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItineraryHtml(String);

impl ItineraryHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItineraryHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_heading(line: &str) -> bool {
    line.starts_with("**") || line.starts_with('#')
}

/// Renders each `\n`-separated line on its own.
///
/// Lines starting with `**` or `#` become `<h3>` with every `**` and `#`
/// removed, other non-empty lines become `<p>`, empty lines produce nothing.
/// Text is inserted as-is, without escaping.
pub fn format_itinerary(text: &str) -> ItineraryHtml {
    let mut html = String::with_capacity(text.len() * 2);
    for line in text.split('\n') {
        if is_heading(line) {
            html.push_str("<h3>");
            html.push_str(&line.replace("**", "").replace('#', ""));
            html.push_str("</h3>");
        } else if !line.is_empty() {
            html.push_str("<p>");
            html.push_str(line);
            html.push_str("</p>");
        }
    }
    ItineraryHtml(html)
}
