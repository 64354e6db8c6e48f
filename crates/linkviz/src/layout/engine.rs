//! Boustrophedon node placement.
//!
//! Nodes fill a row left to right, wrap down, fill the next row right to
//! left, and so on. The block of rows is centred vertically on the canvas and
//! starts far enough from the left margin to leave room for the row-wrap
//! curves.

use log::{debug, trace};

use linkviz_core::{draw::NodeGraph, geometry::Point, list::ListVariant};

use super::{ConnectorRouter, LayoutError, LayoutParams, Scene};

/// Places list nodes on the canvas.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    params: LayoutParams,
}

impl LayoutEngine {
    /// Creates an engine that places nodes with `params`
    ///
    /// ```
    /// # use linkviz::layout::{LayoutEngine, LayoutParams};
    /// let engine = LayoutEngine::new(LayoutParams::default().with_max_per_row(3));
    /// assert_eq!(engine.params().max_per_row(), 3);
    /// ```
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    /// Returns the parameters nodes are placed with
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Center of the first node in a layout of `count` nodes.
    fn first_center(&self, count: usize) -> Point {
        let params = &self.params;
        let node = params.node();
        let curve = params.curve();

        let x = params.margin().width() + node.length() / 2.0
            + node.length() * (curve.depth() + curve.direct())
            - node.corner_radius();
        let total_height = params.rows_height(params.rows_for(count));
        let y = (params.canvas().height() - total_height) / 2.0 + node.width() / 2.0;
        Point::new(x, y)
    }

    /// Computes the center of every node, in list order.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::CapacityExceeded`] if `count` is larger than the
    /// configured maximum; no node is placed in that case.
    pub fn positions(&self, count: usize) -> Result<Vec<Point>, LayoutError> {
        let max = self.params.max_nodes();
        if count > max {
            return Err(LayoutError::CapacityExceeded { count, max });
        }

        let per_row = self.params.max_per_row();
        let pitch = self.params.node_pitch();
        let row_step = self.params.node().width() + self.params.row_spacing();

        let mut centers = Vec::with_capacity(count);
        let mut cursor = self.first_center(count);
        let mut faces_right = true;
        for i in 1..=count {
            trace!(index = i, x = cursor.x(), y = cursor.y(); "Placing node");
            centers.push(cursor);
            if i % per_row == 0 {
                cursor = cursor.shift_y(row_step);
                faces_right = !faces_right;
            } else if faces_right {
                cursor = cursor.shift_x(pitch);
            } else {
                cursor = cursor.shift_x(-pitch);
            }
        }
        Ok(centers)
    }

    /// Lays out a full scene for a snapshot of list values.
    ///
    /// Nodes and connectors carry default colors; apply a palette afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::CapacityExceeded`] if there are more values than
    /// the configured maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linkviz::layout::LayoutEngine;
    /// # use linkviz_core::list::ListVariant;
    /// let engine = LayoutEngine::default();
    /// let scene = engine.layout(&[3, 9, 7, 2], ListVariant::Single).unwrap();
    /// assert_eq!(scene.nodes().len(), 4);
    /// assert_eq!(scene.connectors().len(), 3);
    /// ```
    pub fn layout(&self, values: &[i64], variant: ListVariant) -> Result<Scene, LayoutError> {
        let centers = self.positions(values.len())?;
        let node_size = self.params.node();
        let nodes: Vec<NodeGraph> = values
            .iter()
            .zip(&centers)
            .map(|(&value, &center)| NodeGraph::new(value, center, node_size))
            .collect();

        let connectors = ConnectorRouter::new(self.params).route(&centers, variant);
        debug!(
            variant:% = variant,
            nodes = nodes.len(),
            connectors = connectors.len();
            "Scene laid out"
        );
        Ok(Scene::new(variant, nodes, connectors))
    }
}
