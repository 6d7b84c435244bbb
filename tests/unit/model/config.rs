//! Tests for pattern configuration parsing, defaults, validation and fallbacks

#[cfg(test)]
mod tests {
    use patterncard::PatternError;
    use patterncard::model::config::{
        EngineKind, EquationKind, ParametricConfig, PatternConfig, StyleParams,
        TessellationConfig, TileShape, TurtleConfig,
    };
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Option<PatternConfig> {
        serde_json::from_value(value).ok()
    }

    fn invalid_parameter(config: &PatternConfig) -> Option<&'static str> {
        match config.validate() {
            Err(PatternError::InvalidParameter { parameter, .. }) => Some(parameter),
            _ => None,
        }
    }

    // Tests the engine tag selects the variant and absent fields take defaults
    // Verified by changing the default start heading
    #[test]
    fn test_parse_turtle_with_defaults() {
        let config = parse(json!({
            "engine_type": "l_system",
            "parameters": {
                "axiom": "F",
                "rules": {"F": "F+F"},
                "angle": 90.0,
                "iterations": 2
            }
        }));

        assert!(matches!(config, Some(PatternConfig::Turtle { .. })));
        if let Some(PatternConfig::Turtle { parameters, style }) = config {
            assert_eq!(parameters.line_length, 5.0);
            assert_eq!(parameters.start_x, 500.0);
            assert_eq!(parameters.start_y, 950.0);
            assert_eq!(parameters.start_angle, -90.0);
            assert_eq!(style, StyleParams::turtle());
        }
    }

    // Tests parametric defaults for phase, sample count and style
    // Verified by defaulting num_points to zero
    #[test]
    fn test_parse_parametric_defaults() {
        let config = parse(json!({
            "engine_type": "parametric",
            "parameters": {
                "equation_type": "lissajous",
                "amplitude_a": 100.0, "amplitude_b": 120.0,
                "frequency_a": 3.0, "frequency_b": 2.0
            },
            "style": {"stroke": "#123456"}
        }));

        assert!(matches!(config, Some(PatternConfig::Parametric { .. })));
        if let Some(PatternConfig::Parametric { parameters, style }) = config {
            assert_eq!(parameters.equation_type, EquationKind::Lissajous);
            assert_eq!(parameters.phase_shift, 0.0);
            assert_eq!(parameters.num_points, 1000);
            assert_eq!(style.stroke, "#123456");
            assert_eq!(style.fill, "none");
        }
    }

    // Tests unknown enumerated identifiers fall back to their defaults
    // Verified by rejecting unknown identifiers
    #[test]
    fn test_unknown_identifiers() {
        assert_eq!(EngineKind::parse("voronoi"), EngineKind::Turtle);
        assert_eq!(EquationKind::parse("cardioid"), EquationKind::Rose);
        assert_eq!(TileShape::parse("octagon"), TileShape::Square);
        assert_eq!(EngineKind::parse(" Tessellation "), EngineKind::Tessellation);

        let config = parse(json!({
            "engine_type": "tessellation",
            "parameters": {
                "tile_shape": "octagon",
                "tile_size": 80.0,
                "color_palette": ["#000000", "#FFFFFF"]
            }
        }));
        assert!(matches!(config, Some(PatternConfig::Tessellation { .. })));
        if let Some(PatternConfig::Tessellation { parameters, .. }) = config {
            assert_eq!(parameters.tile_shape, TileShape::Square);
        }
    }

    // Tests identifiers round-trip through their wire names
    // Verified by serializing the variant name
    #[test]
    fn test_wire_names() {
        for kind in EngineKind::ALL {
            assert_eq!(EngineKind::parse(kind.as_str()), kind);
        }
        let value = serde_json::to_value(PatternConfig::fallback(EngineKind::Turtle));
        assert_eq!(
            value.ok().and_then(|v| v.get("engine_type").cloned()),
            Some(json!("l_system"))
        );
        assert_eq!(
            serde_json::to_value(TileShape::Hexagon).ok(),
            Some(json!("hexagon"))
        );
    }

    // Tests an unknown engine tag is a parse failure, not a silent reroute
    // Verified by accepting any tag as the turtle engine
    #[test]
    fn test_unknown_engine_tag() {
        assert!(parse(json!({"engine_type": "voronoi", "parameters": {}})).is_none());
    }

    // Tests the fallback configurations are valid and engine-specific
    // Verified by returning the turtle fallback for every engine
    #[test]
    fn test_fallbacks_valid() {
        for kind in EngineKind::ALL {
            let fallback = PatternConfig::fallback(kind);
            assert_eq!(fallback.kind(), kind);
            assert!(fallback.validate().is_ok(), "{kind} fallback invalid");
        }
        if let PatternConfig::Tessellation { parameters, .. } =
            PatternConfig::fallback(EngineKind::Tessellation)
        {
            assert_eq!(parameters.tile_shape, TileShape::Hexagon);
            assert_eq!(parameters.color_palette.len(), 3);
        }
    }

    // Tests out-of-range parametric values are named in the error
    // Verified by skipping the frequency check
    #[test]
    fn test_parametric_ranges() {
        let mut parameters = ParametricConfig::new(EquationKind::Rose, 200.0, 200.0, 25.0, 3.0);
        let config = PatternConfig::Parametric {
            parameters: parameters.clone(),
            style: StyleParams::parametric(),
        };
        assert_eq!(invalid_parameter(&config), Some("frequency_a"));

        parameters.frequency_a = 5.0;
        parameters.num_points = 4;
        let config = PatternConfig::Parametric {
            parameters,
            style: StyleParams::parametric(),
        };
        assert_eq!(invalid_parameter(&config), Some("num_points"));
    }

    // Tests tessellation palette size and tile size limits
    // Verified by allowing one-color palettes
    #[test]
    fn test_tessellation_ranges() {
        let single = PatternConfig::Tessellation {
            parameters: TessellationConfig::new(TileShape::Square, 100.0, &["#111111"]),
            style: StyleParams::tessellation(),
        };
        assert_eq!(invalid_parameter(&single), Some("color_palette"));

        let tiny = PatternConfig::Tessellation {
            parameters: TessellationConfig::new(TileShape::Square, 10.0, &["#1", "#2"]),
            style: StyleParams::tessellation(),
        };
        assert_eq!(invalid_parameter(&tiny), Some("tile_size"));
    }

    // Tests turtle structural checks
    // Verified by accepting multi-symbol rule keys
    #[test]
    fn test_turtle_checks() {
        let turtle = |parameters: TurtleConfig| PatternConfig::Turtle {
            parameters,
            style: StyleParams::turtle(),
        };

        assert_eq!(
            invalid_parameter(&turtle(TurtleConfig::new("", &[], 90.0, 1))),
            Some("axiom")
        );
        assert_eq!(
            invalid_parameter(&turtle(TurtleConfig::new("F", &[("FF", "F")], 90.0, 1))),
            Some("rules")
        );
        assert_eq!(
            invalid_parameter(&turtle(TurtleConfig::new("F", &[], 90.0, 9))),
            Some("iterations")
        );
    }

    // Tests negative stroke widths are rejected before engine checks
    // Verified by validating only the engine parameters
    #[test]
    fn test_style_checked() {
        let config = PatternConfig::Turtle {
            parameters: TurtleConfig::new("F", &[], 90.0, 1),
            style: StyleParams::new("none", "#000000", -1.0),
        };
        assert_eq!(invalid_parameter(&config), Some("stroke_width"));
    }
}
