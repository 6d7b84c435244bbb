//! Escaping and document scaffolding shared by the compositors

use crate::io::configuration::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Escape the five reserved markup characters
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Opening tag of a full-canvas document
pub fn document_open() -> String {
    format!(
        "<svg width=\"{CANVAS_WIDTH}\" height=\"{CANVAS_HEIGHT}\" \
         viewBox=\"0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}\" xmlns=\"http://www.w3.org/2000/svg\">"
    )
}

/// Closing tag of a document
pub const DOCUMENT_CLOSE: &str = "</svg>";

/// Rectangle covering the whole canvas with the given fill
pub fn full_canvas_rect(fill: &str) -> String {
    format!("<rect width=\"100%\" height=\"100%\" fill=\"{fill}\" />")
}

/// Reference to a fill definition by id
pub fn url_reference(id: &str) -> String {
    format!("url(#{id})")
}
