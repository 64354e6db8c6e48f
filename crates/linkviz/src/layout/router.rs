//! Connector routing.
//!
//! The router works in three steps, each usable on its own:
//!
//! 1. [`ConnectorRouter::route`] decides where each connector starts and
//!    ends, whether it is curved and which way it flows at each end.
//! 2. [`ConnectorRouter::path`] turns a descriptor into line and Bézier
//!    segments.
//! 3. [`ConnectorRouter::glyphs`] places the circle and arrowhead markers.

use log::trace;

use linkviz_core::{
    draw::{
        ConnectorDescriptor, ConnectorDirection, ConnectorKind, ConnectorPath, FlowFlags,
        PathSegment, TerminalGlyph,
    },
    geometry::Point,
    list::ListVariant,
};

use super::LayoutParams;

/// Horizontal handle length at the ends of a row-wrap curve, relative to its radius.
const CURVE_END_HANDLE: f32 = 0.7;

/// Vertical handle length at the middle of a row-wrap curve, relative to its radius.
const CURVE_MID_HANDLE: f32 = 0.5;

/// Stroke and marker dimensions of connectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorStyle {
    line_width: f32,
    marker_radius: f32,
    marker_stroke_width: f32,
    arrow_base: f32,
    arrow_height: f32,
}

impl ConnectorStyle {
    /// Creates a style from line and marker dimensions
    pub fn new(
        line_width: f32,
        marker_radius: f32,
        marker_stroke_width: f32,
        arrow_base: f32,
        arrow_height: f32,
    ) -> Self {
        Self {
            line_width,
            marker_radius,
            marker_stroke_width,
            arrow_base,
            arrow_height,
        }
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Radius of the circle drawn at the start of single links
    pub fn marker_radius(&self) -> f32 {
        self.marker_radius
    }

    pub fn marker_stroke_width(&self) -> f32 {
        self.marker_stroke_width
    }

    /// Arrowhead side perpendicular to the line
    pub fn arrow_base(&self) -> f32 {
        self.arrow_base
    }

    /// Arrowhead length along the line
    pub fn arrow_height(&self) -> f32 {
        self.arrow_height
    }
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self::new(3.0, 7.0, 2.0, 14.0, 12.0)
    }
}

/// Computes connector geometry for laid-out nodes.
#[derive(Debug, Clone, Default)]
pub struct ConnectorRouter {
    params: LayoutParams,
    style: ConnectorStyle,
}

impl ConnectorRouter {
    /// Creates a router for nodes placed with `params`, using the default style
    pub fn new(params: LayoutParams) -> Self {
        Self {
            params,
            style: ConnectorStyle::default(),
        }
    }

    /// Set the marker dimensions used by [`glyphs`](Self::glyphs) (builder style).
    pub fn with_style(mut self, style: ConnectorStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &ConnectorStyle {
        &self.style
    }

    /// Builds the connector descriptors for nodes at `centers`.
    ///
    /// Neighbouring nodes on a row are joined by a straight connector and the
    /// last node of a row is joined to the first of the next by a curve on
    /// the side the row was running towards. A circular list gets one more
    /// connector from the last node back to the first, so a ring of one node
    /// has a single self-loop.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linkviz::layout::{ConnectorRouter, LayoutEngine, LayoutParams};
    /// # use linkviz_core::list::ListVariant;
    /// let params = LayoutParams::default().with_max_per_row(3);
    /// let centers = LayoutEngine::new(params).positions(5).unwrap();
    /// let connectors = ConnectorRouter::new(params).route(&centers, ListVariant::Dual);
    ///
    /// let curved: Vec<bool> = connectors.iter().map(|c| c.kind().is_curved()).collect();
    /// assert_eq!(curved, vec![false, false, true, false]);
    /// ```
    pub fn route(&self, centers: &[Point], variant: ListVariant) -> Vec<ConnectorDescriptor> {
        let per_row = self.params.max_per_row();
        let offset = self.params.node().connector_offset();
        let direction = match variant {
            ListVariant::Dual => ConnectorDirection::Dual,
            ListVariant::Single | ListVariant::Circular => ConnectorDirection::Single,
        };
        let side = |faces_right: bool| if faces_right { offset } else { -offset };

        let mut connectors = Vec::with_capacity(centers.len());
        let mut faces_right = true;
        for (i, pair) in centers.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            let wraps = (i + 1) % per_row == 0;
            let descriptor = if wraps {
                let descriptor = ConnectorDescriptor::new(
                    from.shift_x(side(faces_right)),
                    to.shift_x(side(faces_right)),
                    ConnectorKind::new(direction, true),
                    FlowFlags::new(faces_right, !faces_right),
                );
                faces_right = !faces_right;
                descriptor
            } else {
                ConnectorDescriptor::new(
                    from.shift_x(side(faces_right)),
                    to.shift_x(-side(faces_right)),
                    ConnectorKind::new(direction, false),
                    FlowFlags::new(faces_right, faces_right),
                )
            };
            trace!(
                index = i + 1,
                curved = descriptor.kind().is_curved(),
                start_x = descriptor.start().x(),
                end_x = descriptor.end().x();
                "Routed connector"
            );
            connectors.push(descriptor);
        }

        if variant == ListVariant::Circular {
            if let (Some(&first), Some(&last)) = (centers.first(), centers.last()) {
                connectors.push(ConnectorDescriptor::new(
                    last.shift_x(side(faces_right)),
                    first.shift_x(-offset),
                    ConnectorKind::new(ConnectorDirection::CircularClosing, true),
                    FlowFlags::new(faces_right, true),
                ));
            }
        }

        connectors
    }

    /// Computes the drawable segments of a connector.
    ///
    /// ```
    /// # use linkviz::layout::ConnectorRouter;
    /// # use linkviz_core::{draw::*, geometry::Point};
    /// let descriptor = ConnectorDescriptor::new(
    ///     Point::new(0.0, 0.0),
    ///     Point::new(50.0, 0.0),
    ///     ConnectorKind::new(ConnectorDirection::Single, false),
    ///     FlowFlags::new(true, true),
    /// );
    /// let path = ConnectorRouter::default().path(&descriptor);
    /// assert_eq!(path.to_path_data(), "M 0 0 L 50 0");
    /// ```
    pub fn path(&self, descriptor: &ConnectorDescriptor) -> ConnectorPath {
        let start = descriptor.start();
        let end = descriptor.end();
        let kind = descriptor.kind();
        let faces_left = !descriptor.flow().start_faces_right();

        if !kind.is_curved() {
            return ConnectorPath::new(vec![PathSegment::Line {
                from: start,
                to: end,
            }]);
        }
        match kind.direction() {
            ConnectorDirection::CircularClosing => self.closing_path(start, end, faces_left),
            ConnectorDirection::Single | ConnectorDirection::Dual => {
                self.wrap_path(start, end, faces_left)
            }
        }
    }

    /// Row-wrap curve: a straight lead-in, two Béziers bulging sideways, a
    /// straight lead-out.
    fn wrap_path(&self, start: Point, end: Point, faces_left: bool) -> ConnectorPath {
        let sign = if faces_left { -1.0 } else { 1.0 };
        let height = end.y() - start.y();
        let radius = height / 2.0;
        let lead = sign * self.params.curve().direct() * height;

        let curve_start = start.shift_x(lead);
        let curve_end = end.shift_x(lead);
        let middle = Point::new(
            curve_start.x() + sign * radius,
            (curve_start.y() + curve_end.y()) / 2.0,
        );
        let end_handle = sign * CURVE_END_HANDLE * radius;
        let mid_handle = CURVE_MID_HANDLE * radius;

        ConnectorPath::new(vec![
            PathSegment::Line {
                from: start,
                to: curve_start,
            },
            PathSegment::Cubic {
                from: curve_start,
                ctrl1: curve_start.shift_x(end_handle),
                ctrl2: middle.shift_y(-mid_handle),
                to: middle,
            },
            PathSegment::Cubic {
                from: middle,
                ctrl1: middle.shift_y(mid_handle),
                ctrl2: curve_end.shift_x(end_handle),
                to: curve_end,
            },
            PathSegment::Line {
                from: curve_end,
                to: end,
            },
        ])
    }

    /// Closing edge of a ring: out from the last node, across to just left
    /// of the first node, then in.
    fn closing_path(&self, start: Point, end: Point, faces_left: bool) -> ConnectorPath {
        let lead = self.params.return_lead();
        let turn = if faces_left {
            start.shift_x(-lead)
        } else {
            start.shift_x(lead)
        };
        let approach = end.shift_x(-lead);

        ConnectorPath::new(vec![
            PathSegment::Line {
                from: start,
                to: turn,
            },
            PathSegment::Line {
                from: turn,
                to: approach,
            },
            PathSegment::Line {
                from: approach,
                to: end,
            },
        ])
    }

    /// Computes the start and end markers of a connector.
    ///
    /// Single links and the closing edge of a ring start with a circle;
    /// doubly linked connectors start with an arrowhead pointing back
    /// against the line. Every connector ends with an arrowhead pointing
    /// along the line.
    pub fn glyphs(&self, descriptor: &ConnectorDescriptor) -> [TerminalGlyph; 2] {
        let colors = descriptor.colors();
        let flow = descriptor.flow();
        let style = &self.style;

        let start = match descriptor.kind().direction() {
            ConnectorDirection::Single | ConnectorDirection::CircularClosing => {
                TerminalGlyph::circle(
                    descriptor.start(),
                    style.marker_radius(),
                    style.marker_stroke_width(),
                    colors.start(),
                    colors.start_interior(),
                )
            }
            ConnectorDirection::Dual => TerminalGlyph::triangle(
                descriptor.start(),
                style.arrow_base(),
                style.arrow_height(),
                flow.start_faces_right(),
                colors.start(),
            ),
        };
        let end = TerminalGlyph::triangle(
            descriptor.end(),
            style.arrow_base(),
            style.arrow_height(),
            !flow.end_faces_right(),
            colors.end(),
        );
        [start, end]
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use crate::layout::LayoutEngine;

    fn route(count: usize, per_row: usize, variant: ListVariant) -> Vec<ConnectorDescriptor> {
        let params = LayoutParams::default().with_max_per_row(per_row);
        let centers = LayoutEngine::new(params).positions(count).unwrap();
        ConnectorRouter::new(params).route(&centers, variant)
    }

    #[test]
    fn test_connector_counts() {
        for count in [0, 1, 2, 7] {
            assert_eq!(
                route(count, 5, ListVariant::Single).len(),
                count.saturating_sub(1)
            );
            assert_eq!(
                route(count, 5, ListVariant::Dual).len(),
                count.saturating_sub(1)
            );
            assert_eq!(route(count, 5, ListVariant::Circular).len(), count);
        }
    }

    #[test]
    fn test_straight_connector_endpoints() {
        let params = LayoutParams::default();
        let centers = LayoutEngine::new(params).positions(2).unwrap();
        let connectors = ConnectorRouter::new(params).route(&centers, ListVariant::Single);

        let connector = &connectors[0];
        assert_eq!(connector.start(), centers[0].shift_x(25.0));
        assert_eq!(connector.end(), centers[1].shift_x(-25.0));
        assert_eq!(connector.flow(), FlowFlags::new(true, true));
        assert_eq!(
            connector.kind(),
            ConnectorKind::new(ConnectorDirection::Single, false)
        );
    }

    #[test]
    fn test_row_wrap_curve_flips_flow() {
        let connectors = route(5, 3, ListVariant::Dual);
        let wrap = &connectors[2];
        assert!(wrap.kind().is_curved());
        assert_eq!(wrap.flow(), FlowFlags::new(true, false));
        // both ends on the right of their nodes
        assert_eq!(wrap.start().x(), wrap.end().x());

        let after = &connectors[3];
        assert!(!after.kind().is_curved());
        assert_eq!(after.flow(), FlowFlags::new(false, false));
        assert!(after.end().x() < after.start().x());
    }

    #[test]
    fn test_circular_closing_edge() {
        let params = LayoutParams::default();
        let centers = LayoutEngine::new(params).positions(3).unwrap();
        let connectors = ConnectorRouter::new(params).route(&centers, ListVariant::Circular);

        let closing = connectors.last().unwrap();
        assert_eq!(
            closing.kind(),
            ConnectorKind::new(ConnectorDirection::CircularClosing, true)
        );
        assert_eq!(closing.start(), centers[2].shift_x(25.0));
        assert_eq!(closing.end(), centers[0].shift_x(-25.0));
        assert_eq!(closing.flow(), FlowFlags::new(true, true));
    }

    #[test]
    fn test_single_node_ring_is_self_loop() {
        let params = LayoutParams::default();
        let centers = LayoutEngine::new(params).positions(1).unwrap();
        let connectors = ConnectorRouter::new(params).route(&centers, ListVariant::Circular);
        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].start(), centers[0].shift_x(25.0));
        assert_eq!(connectors[0].end(), centers[0].shift_x(-25.0));
    }

    #[test]
    fn test_closing_edge_from_left_running_row() {
        // 7 nodes on rows of 5: the last row runs left
        let params = LayoutParams::default();
        let centers = LayoutEngine::new(params).positions(7).unwrap();
        let connectors = ConnectorRouter::new(params).route(&centers, ListVariant::Circular);
        let closing = connectors.last().unwrap();
        assert_eq!(closing.start(), centers[6].shift_x(-25.0));
        assert_eq!(closing.flow(), FlowFlags::new(false, true));

        let path = ConnectorRouter::new(params).path(closing);
        let segments = path.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].to(), closing.start().shift_x(-30.0));
        assert_eq!(segments[1].to(), closing.end().shift_x(-30.0));
        assert_eq!(path.end(), Some(closing.end()));
    }

    #[test]
    fn test_wrap_path_geometry() {
        let descriptor = ConnectorDescriptor::new(
            Point::new(100.0, 0.0),
            Point::new(100.0, 90.0),
            ConnectorKind::new(ConnectorDirection::Single, true),
            FlowFlags::new(true, false),
        );
        let path = ConnectorRouter::default().path(&descriptor);
        let segments = path.segments();
        assert_eq!(segments.len(), 4);

        // lead-in of 0.2 * 90
        let curve_start = segments[0].to();
        assert!(approx_eq!(f32, curve_start.x(), 118.0, ulps = 4));
        // bulge of half the height beyond the lead-in
        let middle = segments[1].to();
        assert!(approx_eq!(f32, middle.x(), 163.0, ulps = 4));
        assert!(approx_eq!(f32, middle.y(), 45.0, ulps = 4));

        let PathSegment::Cubic { ctrl1, ctrl2, .. } = segments[1] else {
            panic!("expected a cubic segment");
        };
        assert!(approx_eq!(f32, ctrl1.x(), 118.0 + 0.7 * 45.0, ulps = 4));
        assert!(approx_eq!(f32, ctrl2.y(), 45.0 - 0.5 * 45.0, ulps = 4));

        assert_eq!(path.start(), Some(descriptor.start()));
        assert_eq!(path.end(), Some(descriptor.end()));
    }

    #[test]
    fn test_wrap_path_bulges_left() {
        let descriptor = ConnectorDescriptor::new(
            Point::new(100.0, 0.0),
            Point::new(100.0, 90.0),
            ConnectorKind::new(ConnectorDirection::Dual, true),
            FlowFlags::new(false, true),
        );
        let path = ConnectorRouter::default().path(&descriptor);
        let middle = path.segments()[1].to();
        assert!(approx_eq!(f32, middle.x(), 37.0, ulps = 4));
    }

    #[test]
    fn test_single_glyphs() {
        let connectors = route(2, 5, ListVariant::Single);
        let [start, end] = ConnectorRouter::default().glyphs(&connectors[0]);
        assert!(matches!(start, TerminalGlyph::Circle { radius, .. } if radius == 7.0));
        assert!(matches!(end, TerminalGlyph::Triangle { .. }));
        assert!(!end.points_left());
    }

    #[test]
    fn test_dual_glyphs_point_outwards() {
        let connectors = route(2, 5, ListVariant::Dual);
        let [start, end] = ConnectorRouter::default().glyphs(&connectors[0]);
        assert!(start.points_left());
        assert!(!end.points_left());

        // second row runs left
        let connectors = route(7, 5, ListVariant::Dual);
        let [start, end] = ConnectorRouter::default().glyphs(&connectors[5]);
        assert!(!start.points_left());
        assert!(end.points_left());
    }

    #[test]
    fn test_wrap_glyph_end_points_back() {
        let connectors = route(6, 5, ListVariant::Single);
        let [_, end] = ConnectorRouter::default().glyphs(&connectors[4]);
        assert!(end.points_left());
    }
}
