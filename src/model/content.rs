//! Card text and color scheme supplied by the content provider

use crate::io::error::{Result, invalid_parameter};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Text and overlay colors of a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Color of the title line
    pub primary_text_color: String,
    /// Color of every other line
    pub secondary_text_color: String,
    /// Color of the translucent overlay
    pub overlay_color: String,
    /// Overlay opacity in `[0, 1]`
    pub overlay_opacity: f64,
}

/// The six text fields of a card plus its color scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Main heading
    pub event_title: String,
    /// Line under the heading
    pub event_subtitle: String,
    /// Date line
    pub date_placeholder: String,
    /// Time line
    pub time_placeholder: String,
    /// Venue line
    pub venue_placeholder: String,
    /// Reply line at the bottom
    pub rsvp_text: String,
    /// Colors applied to the text and overlay
    pub color_scheme: ColorScheme,
}

/// Content used whenever the content provider fails
pub static DEFAULT_CONTENT: LazyLock<ContentConfig> = LazyLock::new(|| ContentConfig {
    event_title: "Your Event Here".to_string(),
    event_subtitle: "Join us for a celebration".to_string(),
    date_placeholder: "Date to be announced".to_string(),
    time_placeholder: "Time to be announced".to_string(),
    venue_placeholder: "Venue to be announced".to_string(),
    rsvp_text: "Please RSVP".to_string(),
    color_scheme: ColorScheme {
        primary_text_color: "#FFFFFF".to_string(),
        secondary_text_color: "#F0F0F0".to_string(),
        overlay_color: "#000000".to_string(),
        overlay_opacity: 0.4,
    },
});

impl ContentConfig {
    /// Text lines in top-to-bottom card order
    pub fn lines(&self) -> [&str; 6] {
        [
            &self.event_title,
            &self.event_subtitle,
            &self.date_placeholder,
            &self.time_placeholder,
            &self.venue_placeholder,
            &self.rsvp_text,
        ]
    }

    /// Check the overlay opacity range
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::InvalidParameter`] when the opacity is
    /// outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        let opacity = self.color_scheme.overlay_opacity;
        if (0.0..=1.0).contains(&opacity) {
            Ok(())
        } else {
            Err(invalid_parameter(
                "overlay_opacity",
                &opacity,
                &"must be within 0..=1",
            ))
        }
    }
}
