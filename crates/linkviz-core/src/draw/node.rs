//! List node graphics.

use log::trace;
use svg::{self, node::element as svg_element};

use crate::{
    color::Color,
    geometry::{Bounds, Point, Size},
};

/// Vertical nudge applied to value text so it sits visually centred.
const TEXT_OFFSET: f32 = 1.0;

/// Dimensions shared by every node in a scene.
///
/// A node is a rounded rectangle `length` wide and `width` tall. A `width`
/// smaller than the corner radius is raised to twice the radius so the
/// rounded ends never overlap.
///
/// # Examples
///
/// ```
/// # use linkviz_core::draw::NodeSize;
/// let size = NodeSize::new(80.0, 10.0, 15.0);
/// assert_eq!(size.width(), 30.0);
/// assert_eq!(size.connector_offset(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSize {
    length: f32,
    width: f32,
    corner_radius: f32,
}

impl NodeSize {
    pub fn new(length: f32, width: f32, corner_radius: f32) -> Self {
        let corner_radius = corner_radius.max(0.0);
        let width = if width < corner_radius {
            2.0 * corner_radius
        } else {
            width
        };
        Self {
            length,
            width,
            corner_radius,
        }
    }

    /// Horizontal extent of a node
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Vertical extent of a node
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Distance from a node's center to where its connectors attach.
    pub fn connector_offset(&self) -> f32 {
        self.length / 2.0 - self.corner_radius
    }

    /// The node's bounding size
    pub fn size(&self) -> Size {
        Size::new(self.length, self.width)
    }
}

impl Default for NodeSize {
    fn default() -> Self {
        Self::new(80.0, 30.0, 15.0)
    }
}

/// A positioned list node ready to draw.
///
/// Node graphs are rebuilt on every redraw; only their colors change after
/// layout.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeGraph {
    value: i64,
    center: Point,
    size: NodeSize,
    shape_color: Color,
    text_color: Color,
}

impl NodeGraph {
    pub fn new(value: i64, center: Point, size: NodeSize) -> Self {
        Self {
            value,
            center,
            size,
            shape_color: Color::default(),
            text_color: Color::default(),
        }
    }

    /// Sets both colors (builder style).
    pub fn with_colors(mut self, shape: Color, text: Color) -> Self {
        self.set_colors(shape, text);
        self
    }

    pub fn set_colors(&mut self, shape: Color, text: Color) {
        self.shape_color = shape;
        self.text_color = text;
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn size(&self) -> NodeSize {
        self.size
    }

    pub fn shape_color(&self) -> Color {
        self.shape_color
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Returns the rectangle the node occupies
    pub fn bounds(&self) -> Bounds {
        self.center.to_bounds(self.size.size())
    }

    /// Renders the rounded rectangle with the value centred inside it.
    pub fn render_to_svg(&self) -> Box<dyn svg::Node> {
        let bounds = self.bounds();
        trace!(value = self.value, x = self.center.x(), y = self.center.y(); "Rendering node");

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", self.size.corner_radius())
            .set("ry", self.size.corner_radius())
            .set("fill", &self.shape_color)
            .set("stroke", "none");

        let text = svg_element::Text::new(self.value.to_string())
            .set("x", self.center.x())
            .set("y", self.center.y() + TEXT_OFFSET)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", self.size.width() / 2.0)
            .set("fill", &self.text_color);

        Box::new(
            svg_element::Group::new()
                .set("class", "node")
                .add(rect)
                .add(text),
        )
    }
}
