//! Polygon tiles and shape-specific repeat geometry
//!
//! Produces one polygon centered at the origin plus the repeat cell it
//! tiles in and the instances placed inside that cell. Cell sizes follow
//! the true tiling geometry of each shape rather than its bounding box.

use crate::geometry::Point;
use crate::model::config::{TessellationConfig, TileShape};
use std::f64::consts::FRAC_PI_3;

/// Color used when the palette is empty
pub const DEFAULT_TILE_COLOR: &str = "#4682B4";

/// Horizontal position of hexagon instances as a fraction of the tile width
pub const HEXAGON_COLUMN_OFFSET: f64 = 0.375;

/// Horizontal share of a hexagon's width occupied by one honeycomb column
pub const HEXAGON_COLUMN_WIDTH: f64 = 0.75;

/// Rectangular unit that reproduces the pattern when tiled edge to edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatCell {
    /// Cell width
    pub width: f64,
    /// Cell height
    pub height: f64,
}

/// One tile instance inside the repeat cell
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Translation of the tile center within the cell
    pub offset: Point,
    /// Shape-specific orientation in degrees (180 flips a triangle)
    pub orientation: f64,
    /// Configured rotation in degrees, composed after the orientation
    pub rotation: f64,
    /// Fill color
    pub color: String,
}

/// A generated tile with its repeat geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Tessellation {
    /// Shape of the tile
    pub shape: TileShape,
    /// Polygon vertices centered at the origin
    pub vertices: Vec<Point>,
    /// Repeat cell dimensions
    pub cell: RepeatCell,
    /// Instances placed inside one cell
    pub placements: Vec<Placement>,
}

/// Height of an equilateral triangle, or of a flat-top hexagon, of width `size`
pub fn tile_height(size: f64) -> f64 {
    size * 3.0_f64.sqrt() / 2.0
}

/// Polygon vertices for `shape` centered at the origin
pub fn polygon(shape: TileShape, size: f64) -> Vec<Point> {
    let half = size / 2.0;
    match shape {
        TileShape::Square => vec![
            Point::new(-half, -half),
            Point::new(half, -half),
            Point::new(half, half),
            Point::new(-half, half),
        ],
        TileShape::Diamond => vec![
            Point::new(0.0, -half),
            Point::new(half, 0.0),
            Point::new(0.0, half),
            Point::new(-half, 0.0),
        ],
        TileShape::Hexagon => (0..6)
            .map(|i| {
                let theta = FRAC_PI_3 * f64::from(i);
                Point::new(half * theta.cos(), half * theta.sin())
            })
            .collect(),
        TileShape::Triangle => {
            let height = tile_height(size);
            vec![
                Point::new(0.0, -height * 2.0 / 3.0),
                Point::new(-half, height / 3.0),
                Point::new(half, height / 3.0),
            ]
        }
    }
}

/// Repeat cell for `shape`
///
/// Hexagons advance by three quarters of their width per column; triangles
/// repeat at their own height; squares and diamonds at their size.
pub fn repeat_cell(shape: TileShape, size: f64, spacing: f64) -> RepeatCell {
    match shape {
        TileShape::Hexagon => RepeatCell {
            width: size * HEXAGON_COLUMN_WIDTH + spacing,
            height: tile_height(size) + spacing,
        },
        TileShape::Triangle => RepeatCell {
            width: size + spacing,
            height: tile_height(size) + spacing,
        },
        TileShape::Square | TileShape::Diamond => RepeatCell {
            width: size + spacing,
            height: size + spacing,
        },
    }
}

/// Instances placed inside one repeat cell
///
/// The first palette color is always used. The alternate instance of
/// hexagons and triangles only exists when the palette has a second color.
/// The alternate hexagon spans `[h, 2h]` in a cell `h + spacing` tall, so it
/// is placed but never visible.
pub fn placements(config: &TessellationConfig) -> Vec<Placement> {
    let size = config.tile_size;
    let primary = config
        .color_palette
        .first()
        .map_or(DEFAULT_TILE_COLOR, String::as_str);
    let secondary = config.color_palette.get(1);

    let place = |offset: Point, orientation: f64, color: &str| Placement {
        offset,
        orientation,
        rotation: config.rotation,
        color: color.to_string(),
    };

    match config.tile_shape {
        TileShape::Square | TileShape::Diamond => {
            let center = size / 2.0 + config.spacing / 2.0;
            vec![place(Point::new(center, center), 0.0, primary)]
        }
        TileShape::Hexagon => {
            let height = tile_height(size);
            let x = size * HEXAGON_COLUMN_OFFSET;
            let mut instances = vec![place(Point::new(x, height / 2.0), 0.0, primary)];
            if let Some(color) = secondary {
                instances.push(place(Point::new(x, height * 1.5), 0.0, color.as_str()));
            }
            instances
        }
        TileShape::Triangle => {
            let center = Point::new(size / 2.0, tile_height(size) / 2.0);
            let mut instances = vec![place(center, 0.0, primary)];
            if let Some(color) = secondary {
                instances.push(place(center, 180.0, color.as_str()));
            }
            instances
        }
    }
}

/// Generate the tile polygon, repeat cell and placements for a configuration
pub fn generate(config: &TessellationConfig) -> Tessellation {
    Tessellation {
        shape: config.tile_shape,
        vertices: polygon(config.tile_shape, config.tile_size),
        cell: repeat_cell(config.tile_shape, config.tile_size, config.spacing),
        placements: placements(config),
    }
}
