//! Repeating fill definitions and background documents
//!
//! Path patterns are drawn on a 1000×1000 design space and scaled into a
//! 300×300 cell. Tessellations use their shape-specific cell and place one
//! group per instance. The compositor only sizes cells and places
//! instances; seam quality is the engine's responsibility.

use crate::compose::markup::{
    DOCUMENT_CLOSE, document_open, escape_xml, full_canvas_rect, url_reference,
};
use crate::engine::tessellation::{Placement, Tessellation};
use crate::geometry::PathData;
use crate::io::configuration::{PATH_TILE_SIZE, PATH_VIEW_BOX};
use crate::model::config::{EngineKind, StyleParams};

/// Fill definition id used for patterns of an engine
pub const fn pattern_id(kind: EngineKind) -> &'static str {
    match kind {
        EngineKind::Turtle => "fractal-pattern",
        EngineKind::Parametric => "parametric-pattern",
        EngineKind::Tessellation => "tessellation-pattern",
    }
}

/// Contents of one repeat cell
#[derive(Debug, Clone, PartialEq)]
pub enum TileBody {
    /// A single path drawn in a square design space scaled to the cell
    Scaled {
        /// Geometry in design-space coordinates
        path: PathData,
        /// Side of the design space
        view_box: f64,
    },
    /// A polygon placed once per instance
    Placed {
        /// Polygon centered at the origin
        path: PathData,
        /// Instances inside the cell
        placements: Vec<Placement>,
    },
}

/// Named, size-bound repeating fill
#[derive(Debug, Clone, PartialEq)]
pub struct TileDefinition {
    /// Fill id referenced by the background rectangle
    pub id: &'static str,
    /// Cell width
    pub width: f64,
    /// Cell height
    pub height: f64,
    /// Stroke and default fill of the geometry
    pub style: StyleParams,
    /// Cell contents
    pub body: TileBody,
}

impl TileDefinition {
    /// Wrap a path-engine path into a square cell
    pub fn from_path(kind: EngineKind, path: PathData, style: StyleParams) -> Self {
        Self {
            id: pattern_id(kind),
            width: PATH_TILE_SIZE,
            height: PATH_TILE_SIZE,
            style,
            body: TileBody::Scaled {
                path,
                view_box: PATH_VIEW_BOX,
            },
        }
    }

    /// Wrap a tessellation into its shape-specific cell
    pub fn from_tessellation(tessellation: Tessellation, style: StyleParams) -> Self {
        Self {
            id: pattern_id(EngineKind::Tessellation),
            width: tessellation.cell.width,
            height: tessellation.cell.height,
            style,
            body: TileBody::Placed {
                path: PathData::from_polygon(&tessellation.vertices),
                placements: tessellation.placements,
            },
        }
    }

    /// Number of geometry instances drawn per cell
    pub fn instance_count(&self) -> usize {
        match &self.body {
            TileBody::Scaled { .. } => 1,
            TileBody::Placed { placements, .. } => placements.len(),
        }
    }

    /// The `<pattern>` element for this definition
    pub fn to_markup(&self) -> String {
        let mut markup = format!(
            "    <pattern id=\"{}\" patternUnits=\"userSpaceOnUse\" width=\"{}\" height=\"{}\">\n",
            self.id, self.width, self.height
        );

        match &self.body {
            TileBody::Scaled { path, view_box } => {
                markup.push_str(&format!(
                    "      <svg viewBox=\"0 0 {view_box} {view_box}\" \
                     width=\"{}\" height=\"{}\">\n",
                    self.width, self.height
                ));
                markup.push_str(&format!(
                    "        {}\n",
                    self.path_element(path, &self.style.fill)
                ));
                markup.push_str("      </svg>\n");
            }
            TileBody::Placed { path, placements } => {
                for placement in placements {
                    markup.push_str(&format!(
                        "      <g transform=\"{}\">\n        {}\n      </g>\n",
                        transform(placement),
                        self.path_element(path, &placement.color)
                    ));
                }
            }
        }

        markup.push_str("    </pattern>");
        markup
    }

    fn path_element(&self, path: &PathData, fill: &str) -> String {
        format!(
            "<path d=\"{path}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />",
            escape_xml(fill),
            escape_xml(&self.style.stroke),
            self.style.stroke_width
        )
    }
}

/// Placement transform: translation, then orientation, then configured rotation
pub fn transform(placement: &Placement) -> String {
    let mut transform = format!("translate({}, {})", placement.offset.x, placement.offset.y);
    if placement.orientation != 0.0 {
        transform.push_str(&format!(" rotate({})", placement.orientation));
    }
    if placement.rotation != 0.0 {
        transform.push_str(&format!(" rotate({})", placement.rotation));
    }
    transform
}

/// Full-canvas document painted with the tile, optionally captioned
pub fn render_background(tile: &TileDefinition, caption: Option<&str>) -> String {
    let mut document = document_open();
    document.push_str("\n  <defs>\n");
    document.push_str(&tile.to_markup());
    document.push_str("\n  </defs>\n  ");
    document.push_str(&full_canvas_rect(&url_reference(tile.id)));
    document.push('\n');

    if let Some(caption) = caption {
        document.push_str(&format!(
            "  <text x=\"50%\" y=\"50%\" font-family=\"sans-serif\" font-size=\"72\" \
             fill=\"white\" stroke=\"black\" stroke-width=\"2\" \
             text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>\n",
            escape_xml(caption)
        ));
    }

    document.push_str(DOCUMENT_CLOSE);
    document
}
