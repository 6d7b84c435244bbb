//! Tests for repeating fill definitions and background documents

#[cfg(test)]
mod tests {
    use patterncard::compose::tile::{
        TileDefinition, pattern_id, render_background, transform,
    };
    use patterncard::engine::tessellation::{self, Placement};
    use patterncard::geometry::{PathData, Point};
    use patterncard::model::config::{EngineKind, StyleParams, TessellationConfig, TileShape};

    fn line_path() -> PathData {
        PathData::from_points(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], Point::origin())
    }

    // Tests pattern ids per engine
    // Verified by sharing one id across engines
    #[test]
    fn test_pattern_ids() {
        assert_eq!(pattern_id(EngineKind::Turtle), "fractal-pattern");
        assert_eq!(pattern_id(EngineKind::Parametric), "parametric-pattern");
        assert_eq!(pattern_id(EngineKind::Tessellation), "tessellation-pattern");
    }

    // Tests path tiles scale a 1000 unit design space into a 300 unit cell
    // Verified by sizing the cell to the design space
    #[test]
    fn test_path_tile_markup() {
        let tile = TileDefinition::from_path(
            EngineKind::Parametric,
            line_path(),
            StyleParams::new("none", "#FF1493", 2.0),
        );
        let markup = tile.to_markup();

        assert_eq!(tile.instance_count(), 1);
        assert!(markup.contains(
            "<pattern id=\"parametric-pattern\" patternUnits=\"userSpaceOnUse\" width=\"300\" height=\"300\">"
        ));
        assert!(markup.contains("<svg viewBox=\"0 0 1000 1000\" width=\"300\" height=\"300\">"));
        assert!(markup.contains(
            "<path d=\"M 0 0 L 10 0 Z\" fill=\"none\" stroke=\"#FF1493\" stroke-width=\"2\" />"
        ));
        assert!(markup.trim_end().ends_with("</pattern>"));
    }

    // Tests a single-color tessellation tile has one group and no alternate color
    // Verified by always emitting two groups
    #[test]
    fn test_single_color_tessellation_tile() {
        let config = TessellationConfig::new(TileShape::Square, 100.0, &["#111111"]);
        let tile = TileDefinition::from_tessellation(
            tessellation::generate(&config),
            StyleParams::tessellation(),
        );
        let markup = tile.to_markup();

        assert_eq!(tile.instance_count(), 1);
        assert_eq!(tile.width, 100.0);
        assert_eq!(tile.height, 100.0);
        assert_eq!(markup.matches("<g ").count(), 1);
        assert!(markup.contains("fill=\"#111111\""));
        assert!(markup.contains("translate(50, 50)"));
        assert!(!markup.contains("rotate"));
    }

    // Tests the tessellation tile adopts the hexagon cell size
    // Verified by using the tile size as cell height
    #[test]
    fn test_hexagon_tile_cell() {
        let config = TessellationConfig::new(TileShape::Hexagon, 100.0, &["#111111", "#222222"]);
        let tile = TileDefinition::from_tessellation(
            tessellation::generate(&config),
            StyleParams::tessellation(),
        );

        assert_eq!(tile.id, "tessellation-pattern");
        assert_eq!(tile.height, 100.0 * 3.0_f64.sqrt() / 2.0);
        assert_eq!(tile.instance_count(), 2);
        assert!(tile.to_markup().contains("fill=\"#222222\""));
    }

    // Tests transforms compose translation, orientation and configured rotation in order
    // Verified by emitting the configured rotation first
    #[test]
    fn test_transform_order() {
        let placement = Placement {
            offset: Point::new(50.0, 43.5),
            orientation: 180.0,
            rotation: 15.0,
            color: "#000000".to_string(),
        };
        assert_eq!(transform(&placement), "translate(50, 43.5) rotate(180) rotate(15)");

        let plain = Placement {
            orientation: 0.0,
            rotation: 0.0,
            ..placement
        };
        assert_eq!(transform(&plain), "translate(50, 43.5)");
    }

    // Tests the background paints the canvas with the fill and carries the caption
    // Verified by omitting the caption text
    #[test]
    fn test_render_background() {
        let tile =
            TileDefinition::from_path(EngineKind::Turtle, line_path(), StyleParams::turtle());

        let captioned = render_background(&tile, Some("Tom & Jerry"));
        assert!(captioned.starts_with("<svg "));
        assert!(captioned.ends_with("</svg>"));
        assert!(captioned.contains("<defs>"));
        assert!(captioned.contains("fill=\"url(#fractal-pattern)\""));
        assert!(captioned.contains(">Tom &amp; Jerry</text>"));

        let bare = render_background(&tile, None);
        assert!(!bare.contains("<text"));
    }

    // Tests colors in styles are escaped in attributes
    // Verified by writing the raw stroke
    #[test]
    fn test_style_escaped() {
        let tile = TileDefinition::from_path(
            EngineKind::Turtle,
            line_path(),
            StyleParams::new("none", "\"red\"", 1.0),
        );
        assert!(tile.to_markup().contains("stroke=\"&quot;red&quot;\""));
    }
}
