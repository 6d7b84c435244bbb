//! Tests for card content, the default content and opacity validation

#[cfg(test)]
mod tests {
    use patterncard::model::content::{ContentConfig, DEFAULT_CONTENT};
    use serde_json::json;

    // Tests the default content values
    // Verified by changing the default overlay opacity
    #[test]
    fn test_default_content() {
        assert_eq!(DEFAULT_CONTENT.event_title, "Your Event Here");
        assert_eq!(DEFAULT_CONTENT.rsvp_text, "Please RSVP");
        assert_eq!(DEFAULT_CONTENT.color_scheme.primary_text_color, "#FFFFFF");
        assert_eq!(DEFAULT_CONTENT.color_scheme.secondary_text_color, "#F0F0F0");
        assert_eq!(DEFAULT_CONTENT.color_scheme.overlay_color, "#000000");
        assert_eq!(DEFAULT_CONTENT.color_scheme.overlay_opacity, 0.4);
        assert!(DEFAULT_CONTENT.validate().is_ok());
    }

    // Tests lines come out in top-to-bottom card order
    // Verified by swapping date and time
    #[test]
    fn test_lines_order() {
        assert_eq!(
            DEFAULT_CONTENT.lines(),
            [
                "Your Event Here",
                "Join us for a celebration",
                "Date to be announced",
                "Time to be announced",
                "Venue to be announced",
                "Please RSVP",
            ]
        );
    }

    // Tests opacity bounds are inclusive
    // Verified by using an exclusive upper bound
    #[test]
    fn test_opacity_validation() {
        let mut content = DEFAULT_CONTENT.clone();
        for valid in [0.0, 0.5, 1.0] {
            content.color_scheme.overlay_opacity = valid;
            assert!(content.validate().is_ok());
        }
        for invalid in [-0.1, 1.01, f64::NAN] {
            content.color_scheme.overlay_opacity = invalid;
            assert!(content.validate().is_err());
        }
    }

    // Tests content parses from its JSON form
    // Verified by renaming the subtitle field
    #[test]
    fn test_parse_content() {
        let content: Option<ContentConfig> = serde_json::from_value(json!({
            "event_title": "Spring Gala",
            "event_subtitle": "An evening of music",
            "date_placeholder": "May 3",
            "time_placeholder": "7 PM",
            "venue_placeholder": "Town Hall",
            "rsvp_text": "Reply by April 20",
            "color_scheme": {
                "primary_text_color": "#FFD700",
                "secondary_text_color": "#FFFFFF",
                "overlay_color": "#1A1A1A",
                "overlay_opacity": 0.55
            }
        }))
        .ok();

        assert_eq!(
            content.as_ref().map(|c| c.event_subtitle.as_str()),
            Some("An evening of music")
        );
        assert_eq!(content.map(|c| c.color_scheme.overlay_opacity), Some(0.55));
    }
}
