//! Connector lines between list nodes.
//!
//! A connector is described in three layers:
//!
//! - [`ConnectorDescriptor`]: where a connector starts and ends, what kind it
//!   is and which way the line flows at each end
//! - [`ConnectorPath`]: the line or curve segments drawn between the ends
//! - [`TerminalGlyph`]: the circle or arrowhead drawn at each end
//!
//! Turning a descriptor into a path and glyphs is the job of the layout
//! router; the types here only hold and render the geometry.

use std::fmt::{self, Write};

use svg::{self, node::element as svg_element};

use crate::{color::Color, geometry::Point};

/// Which relationship a connector depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorDirection {
    /// A `next` link drawn with a circle at the start and an arrow at the end
    Single,
    /// A `next`/`previous` pair drawn with arrows at both ends
    Dual,
    /// The link from the last node of a ring back to the first
    CircularClosing,
}

impl fmt::Display for ConnectorDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Dual => write!(f, "dual"),
            Self::CircularClosing => write!(f, "circular_closing"),
        }
    }
}

/// Direction plus whether the connector is drawn curved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorKind {
    direction: ConnectorDirection,
    curved: bool,
}

impl ConnectorKind {
    pub fn new(direction: ConnectorDirection, curved: bool) -> Self {
        Self { direction, curved }
    }

    pub fn direction(&self) -> ConnectorDirection {
        self.direction
    }

    pub fn is_curved(&self) -> bool {
        self.curved
    }
}

/// Which way the line travels as it leaves its start and enters its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowFlags {
    start_faces_right: bool,
    end_faces_right: bool,
}

impl FlowFlags {
    pub fn new(start_faces_right: bool, end_faces_right: bool) -> Self {
        Self {
            start_faces_right,
            end_faces_right,
        }
    }

    /// True if the line leaves its start heading right
    pub fn start_faces_right(&self) -> bool {
        self.start_faces_right
    }

    /// True if the line arrives at its end heading right
    pub fn end_faces_right(&self) -> bool {
        self.end_faces_right
    }
}

/// Colors for the four parts of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorColors {
    line: Color,
    start: Color,
    end: Color,
    start_interior: Color,
}

impl ConnectorColors {
    pub fn new(line: Color, start: Color, end: Color, start_interior: Color) -> Self {
        Self {
            line,
            start,
            end,
            start_interior,
        }
    }

    /// Uses one color for the line and both terminals, with the given interior.
    pub fn uniform(color: Color, start_interior: Color) -> Self {
        Self::new(color, color, color, start_interior)
    }

    pub fn line(&self) -> Color {
        self.line
    }

    /// Stroke of the start circle, or fill of the start arrowhead
    pub fn start(&self) -> Color {
        self.start
    }

    /// Fill of the end arrowhead
    pub fn end(&self) -> Color {
        self.end
    }

    /// Fill inside the start circle
    pub fn start_interior(&self) -> Color {
        self.start_interior
    }
}

impl Default for ConnectorColors {
    fn default() -> Self {
        let parse = |s: &str| Color::new(s).unwrap_or_default();
        Self::new(
            parse("#4143CC"),
            parse("#FD8189"),
            parse("#92CD33"),
            parse("#FFFFFF"),
        )
    }
}

/// A connector between two nodes, before its path is worked out.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorDescriptor {
    colors: ConnectorColors,
    start: Point,
    end: Point,
    kind: ConnectorKind,
    flow: FlowFlags,
}

impl ConnectorDescriptor {
    pub fn new(start: Point, end: Point, kind: ConnectorKind, flow: FlowFlags) -> Self {
        Self {
            colors: ConnectorColors::default(),
            start,
            end,
            kind,
            flow,
        }
    }

    /// Sets the colors (builder style).
    pub fn with_colors(mut self, colors: ConnectorColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn set_colors(&mut self, colors: ConnectorColors) {
        self.colors = colors;
    }

    pub fn colors(&self) -> ConnectorColors {
        self.colors
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn kind(&self) -> ConnectorKind {
        self.kind
    }

    pub fn flow(&self) -> FlowFlags {
        self.flow
    }
}

/// One piece of a connector path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// A straight line.
    Line { from: Point, to: Point },
    /// A cubic Bézier curve with two control points.
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
}

impl PathSegment {
    pub fn from(&self) -> Point {
        match *self {
            Self::Line { from, .. } | Self::Cubic { from, .. } => from,
        }
    }

    pub fn to(&self) -> Point {
        match *self {
            Self::Line { to, .. } | Self::Cubic { to, .. } => to,
        }
    }
}

/// The drawable segments of a connector, in travel order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectorPath {
    segments: Vec<PathSegment>,
}

impl ConnectorPath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Where the path begins, if it has any segments
    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(PathSegment::from)
    }

    /// Where the path ends, if it has any segments
    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(PathSegment::to)
    }

    /// Returns SVG path data for the segments.
    ///
    /// A new subpath is started only where a segment does not begin at the
    /// previous segment's end.
    ///
    /// ```
    /// # use linkviz_core::{draw::{ConnectorPath, PathSegment}, geometry::Point};
    /// let path = ConnectorPath::new(vec![
    ///     PathSegment::Line { from: Point::new(0.0, 0.0), to: Point::new(10.0, 0.0) },
    ///     PathSegment::Line { from: Point::new(10.0, 0.0), to: Point::new(10.0, 5.0) },
    /// ]);
    /// assert_eq!(path.to_path_data(), "M 0 0 L 10 0 L 10 5");
    /// ```
    pub fn to_path_data(&self) -> String {
        let mut data = String::new();
        let mut cursor: Option<Point> = None;
        for segment in &self.segments {
            if cursor != Some(segment.from()) {
                let from = segment.from();
                let separator = if data.is_empty() { "" } else { " " };
                let _ = write!(data, "{separator}M {} {}", from.x(), from.y());
            }
            match *segment {
                PathSegment::Line { to, .. } => {
                    let _ = write!(data, " L {} {}", to.x(), to.y());
                }
                PathSegment::Cubic {
                    ctrl1, ctrl2, to, ..
                } => {
                    let _ = write!(
                        data,
                        " C {} {}, {} {}, {} {}",
                        ctrl1.x(),
                        ctrl1.y(),
                        ctrl2.x(),
                        ctrl2.y(),
                        to.x(),
                        to.y()
                    );
                }
            }
            cursor = Some(segment.to());
        }
        data
    }

    /// Renders the path as an unfilled SVG stroke.
    pub fn render_to_svg(&self, color: Color, line_width: f32) -> Box<dyn svg::Node> {
        Box::new(
            svg_element::Path::new()
                .set("d", self.to_path_data())
                .set("fill", "none")
                .set("stroke", &color)
                .set("stroke-width", line_width)
                .set("stroke-linejoin", "round"),
        )
    }
}

/// A marker drawn at one end of a connector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TerminalGlyph {
    /// An outlined circle.
    Circle {
        center: Point,
        radius: f32,
        stroke_width: f32,
        stroke: Color,
        fill: Color,
    },
    /// A filled triangle, tip first.
    Triangle { vertices: [Point; 3], fill: Color },
}

impl TerminalGlyph {
    /// Builds an arrowhead centred on `center`.
    ///
    /// `base` is the side perpendicular to the line and `height` the distance
    /// from base to tip. The tip sits `2/3` of the height from the center.
    ///
    /// ```
    /// # use linkviz_core::{color::Color, draw::TerminalGlyph, geometry::Point};
    /// let glyph = TerminalGlyph::triangle(Point::new(0.0, 0.0), 14.0, 12.0, false, Color::default());
    /// let TerminalGlyph::Triangle { vertices, .. } = glyph else { unreachable!() };
    /// assert_eq!(vertices[0], Point::new(8.0, 0.0));
    /// assert_eq!(vertices[1], Point::new(-4.0, 7.0));
    /// ```
    pub fn triangle(center: Point, base: f32, height: f32, points_left: bool, fill: Color) -> Self {
        let sign = if points_left { -1.0 } else { 1.0 };
        let tip = center.shift_x(sign * 2.0 * height / 3.0);
        let back = center.shift_x(-sign * height / 3.0);
        Self::Triangle {
            vertices: [tip, back.shift_y(base / 2.0), back.shift_y(-base / 2.0)],
            fill,
        }
    }

    /// Builds a circle marker centred on `center`
    pub fn circle(center: Point, radius: f32, stroke_width: f32, stroke: Color, fill: Color) -> Self {
        Self::Circle {
            center,
            radius,
            stroke_width,
            stroke,
            fill,
        }
    }

    /// Returns true if this is an arrowhead whose tip is left of its base
    pub fn points_left(&self) -> bool {
        match self {
            Self::Triangle { vertices, .. } => vertices[0].x() < vertices[1].x(),
            Self::Circle { .. } => false,
        }
    }

    pub fn render_to_svg(&self) -> Box<dyn svg::Node> {
        match self {
            Self::Circle {
                center,
                radius,
                stroke_width,
                stroke,
                fill,
            } => Box::new(
                svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", *radius)
                    .set("fill", fill)
                    .set("stroke", stroke)
                    .set("stroke-width", *stroke_width),
            ),
            Self::Triangle { vertices, fill } => {
                let points = vertices
                    .iter()
                    .map(|p| format!("{},{}", p.x(), p.y()))
                    .collect::<Vec<_>>()
                    .join(" ");
                Box::new(
                    svg_element::Polygon::new()
                        .set("points", points)
                        .set("fill", fill)
                        .set("stroke", "none"),
                )
            }
        }
    }
}
