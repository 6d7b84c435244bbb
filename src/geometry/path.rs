//! Portable path descriptions built from move, line and close commands
//!
//! The assembler turns point sequences and polygon vertices into closed
//! paths. Turtle walks build paths incrementally and may contain several
//! disjoint subpaths, one per pen lift.

use crate::geometry::point::Point;
use std::fmt;

/// A single drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Lift the pen and start a new subpath at the point
    MoveTo(Point),
    /// Draw a straight segment to the point
    LineTo(Point),
    /// Close the current subpath back to its start
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            Self::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
            Self::Close => f.write_str("Z"),
        }
    }
}

/// Ordered list of path commands
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Create an empty path
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create an empty path with room for `capacity` commands
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Assemble a closed path through `points`, each shifted by `offset`
    ///
    /// Emits a move to the first point, a line to every later point and a
    /// trailing close, even when the first and last points coincide. An
    /// empty sequence yields an empty path.
    pub fn from_points(points: &[Point], offset: Point) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::new();
        };

        let mut path = Self::with_capacity(points.len() + 1);
        path.move_to(*first + offset);
        for point in rest {
            path.line_to(*point + offset);
        }
        path.close();
        path
    }

    /// Assemble a closed path through polygon vertices without any offset
    ///
    /// Polygons are positioned at placement time instead.
    pub fn from_polygon(vertices: &[Point]) -> Self {
        Self::from_points(vertices, Point::origin())
    }

    /// Start a new subpath
    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    /// Append a straight segment
    pub fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }

    /// Close the current subpath
    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// All commands in drawing order
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the path has no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of drawn segments
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }

    /// Number of subpaths (one per move command)
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }

    /// Every point visited by a move or line command, in order
    pub fn points(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                PathCommand::Close => None,
            })
            .collect()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut commands = self.commands.iter();
        if let Some(first) = commands.next() {
            write!(f, "{first}")?;
        }
        for command in commands {
            write!(f, " {command}")?;
        }
        Ok(())
    }
}
