//! Card layering over a tiled background
//!
//! Layers, bottom to top: the pattern background recovered from a rendered
//! background document, a full-canvas translucent overlay, and six fixed
//! text lines. Text is escaped but never wrapped or measured.

use crate::compose::markup::{DOCUMENT_CLOSE, document_open, escape_xml, full_canvas_rect};
use crate::io::configuration::NEUTRAL_FILL;
use crate::model::content::{ColorScheme, ContentConfig};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static DEFS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)<defs>(.*?)</defs>").ok());

static FILL_RECT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"<rect[^>]*fill="url\(#[^"]*\)"[^>]*/>"#).ok());

/// Pattern definitions and the rectangle painting them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    /// Inner content of the `<defs>` block
    pub defs: String,
    /// The rectangle element filling the canvas
    pub fill_rect: String,
}

impl Background {
    /// Flat neutral fill used when a background cannot be recovered
    pub fn neutral() -> Self {
        Self {
            defs: String::new(),
            fill_rect: full_canvas_rect(NEUTRAL_FILL),
        }
    }

    /// Recover the pattern definitions and fill rectangle from a document
    ///
    /// Returns `None` when either part is missing.
    pub fn extract(markup: &str) -> Option<Self> {
        let defs_regex = DEFS_PATTERN.as_ref()?;
        let rect_regex = FILL_RECT_PATTERN.as_ref()?;

        let defs = defs_regex.captures(markup)?.get(1)?.as_str();
        let fill_rect = rect_regex.find(markup)?.as_str();

        Some(Self {
            defs: defs.to_string(),
            fill_rect: fill_rect.to_string(),
        })
    }

    /// Recover the background, substituting the neutral fill on failure
    pub fn extract_or_neutral(markup: &str) -> Self {
        Self::extract(markup).unwrap_or_else(|| {
            warn!("pattern elements not found in background markup, using neutral fill");
            Self::neutral()
        })
    }
}

/// Which color of the scheme a text line uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTier {
    /// Primary text color
    Primary,
    /// Secondary text color
    Secondary,
}

impl TextTier {
    /// Resolve the tier against a color scheme
    pub fn color(self, scheme: &ColorScheme) -> &str {
        match self {
            Self::Primary => &scheme.primary_text_color,
            Self::Secondary => &scheme.secondary_text_color,
        }
    }
}

/// Fixed placement and typography of one text line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLine {
    /// Vertical position of the line's center
    pub y: f64,
    /// Font family
    pub font_family: &'static str,
    /// Font size
    pub font_size: u32,
    /// Additional font attributes
    pub emphasis: &'static str,
    /// Color tier
    pub tier: TextTier,
}

/// Title, subtitle, date, time, venue and RSVP lines, top to bottom
pub const TEXT_LINES: [TextLine; 6] = [
    TextLine {
        y: 800.0,
        font_family: "serif",
        font_size: 96,
        emphasis: " font-weight=\"bold\"",
        tier: TextTier::Primary,
    },
    TextLine {
        y: 900.0,
        font_family: "serif",
        font_size: 48,
        emphasis: " font-style=\"italic\"",
        tier: TextTier::Secondary,
    },
    TextLine {
        y: 1000.0,
        font_family: "sans-serif",
        font_size: 36,
        emphasis: "",
        tier: TextTier::Secondary,
    },
    TextLine {
        y: 1080.0,
        font_family: "sans-serif",
        font_size: 36,
        emphasis: "",
        tier: TextTier::Secondary,
    },
    TextLine {
        y: 1160.0,
        font_family: "sans-serif",
        font_size: 36,
        emphasis: "",
        tier: TextTier::Secondary,
    },
    TextLine {
        y: 1300.0,
        font_family: "sans-serif",
        font_size: 32,
        emphasis: "",
        tier: TextTier::Secondary,
    },
];

fn text_element(line: &TextLine, text: &str, scheme: &ColorScheme) -> String {
    format!(
        "  <text x=\"50%\" y=\"{}\" font-family=\"{}\" font-size=\"{}\"{} fill=\"{}\" \
         text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>\n",
        line.y,
        line.font_family,
        line.font_size,
        line.emphasis,
        escape_xml(line.tier.color(scheme)),
        escape_xml(text)
    )
}

/// Layer the background, overlay and text lines into a card document
pub fn compose(background: &Background, content: &ContentConfig) -> String {
    let scheme = &content.color_scheme;
    let mut document = document_open();

    document.push_str("\n  <defs>");
    document.push_str(&background.defs);
    document.push_str("</defs>\n  ");
    document.push_str(&background.fill_rect);
    document.push('\n');

    document.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\" opacity=\"{}\" />\n",
        escape_xml(&scheme.overlay_color),
        scheme.overlay_opacity
    ));

    for (line, text) in TEXT_LINES.iter().zip(content.lines()) {
        document.push_str(&text_element(line, text, scheme));
    }

    document.push_str(DOCUMENT_CLOSE);
    debug!(bytes = document.len(), "card composed");
    document
}

/// Compose a card directly from rendered background markup
///
/// Malformed markup degrades to a flat neutral background.
pub fn compose_from_markup(background_markup: &str, content: &ContentConfig) -> String {
    compose(&Background::extract_or_neutral(background_markup), content)
}
