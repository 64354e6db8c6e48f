use linkviz_core::{draw::NodeSize, geometry::Size};

/// Shape of the curve joining the last node of a row to the first of the next.
///
/// Both ratios are relative to the vertical distance the curve covers:
/// `direct` is the straight lead-in and lead-out before bending, `depth` is
/// how far the bend bulges beyond them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveRatio {
    direct: f32,
    depth: f32,
}

impl CurveRatio {
    /// Creates a ratio from the straight lead and the bend depth
    pub fn new(direct: f32, depth: f32) -> Self {
        Self { direct, depth }
    }

    pub fn direct(&self) -> f32 {
        self.direct
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }
}

impl Default for CurveRatio {
    fn default() -> Self {
        Self::new(0.2, 0.5)
    }
}

/// Dimensions shared by the layout engine, the connector router and the
/// validator.
///
/// Construct with [`LayoutParams::default`] and adjust with the `with_*`
/// methods.
///
/// # Examples
///
/// ```
/// # use linkviz::layout::LayoutParams;
/// let params = LayoutParams::default().with_max_per_row(3);
/// assert_eq!(params.max_per_row(), 3);
/// assert_eq!(params.rows_for(7), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    max_per_row: usize,
    max_nodes: usize,
    node: NodeSize,
    row_spacing: f32,
    node_spacing: f32,
    margin: Size,
    canvas: Size,
    curve: CurveRatio,
    return_lead: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            max_per_row: 5,
            max_nodes: 25,
            node: NodeSize::default(),
            row_spacing: 60.0,
            node_spacing: 70.0,
            margin: Size::new(110.0, 150.0),
            canvas: Size::new(1000.0, 700.0),
            curve: CurveRatio::default(),
            return_lead: 30.0,
        }
    }
}

impl LayoutParams {
    /// Set the number of nodes placed on a row before wrapping.
    ///
    /// Values below 1 are raised to 1.
    pub fn with_max_per_row(mut self, max_per_row: usize) -> Self {
        self.max_per_row = max_per_row.max(1);
        self
    }

    /// Set the largest number of nodes a scene may hold
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Set the node dimensions
    pub fn with_node(mut self, node: NodeSize) -> Self {
        self.node = node;
        self
    }

    /// Set the vertical gap between rows
    pub fn with_row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Set the horizontal gap between neighbouring nodes
    pub fn with_node_spacing(mut self, spacing: f32) -> Self {
        self.node_spacing = spacing;
        self
    }

    /// Set the horizontal (`width`) and vertical (`height`) canvas margins
    pub fn with_margin(mut self, margin: Size) -> Self {
        self.margin = margin;
        self
    }

    /// Set the canvas size
    pub fn with_canvas(mut self, canvas: Size) -> Self {
        self.canvas = canvas;
        self
    }

    /// Set the row-wrap curve proportions
    pub fn with_curve(mut self, curve: CurveRatio) -> Self {
        self.curve = curve;
        self
    }

    /// Set how far the circular closing edge runs out before turning back
    pub fn with_return_lead(mut self, lead: f32) -> Self {
        self.return_lead = lead;
        self
    }

    pub fn max_per_row(&self) -> usize {
        self.max_per_row
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    pub fn node(&self) -> NodeSize {
        self.node
    }

    pub fn row_spacing(&self) -> f32 {
        self.row_spacing
    }

    pub fn node_spacing(&self) -> f32 {
        self.node_spacing
    }

    pub fn margin(&self) -> Size {
        self.margin
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn curve(&self) -> CurveRatio {
        self.curve
    }

    pub fn return_lead(&self) -> f32 {
        self.return_lead
    }

    /// Number of rows needed to hold `count` nodes
    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.max_per_row)
    }

    /// Height of `rows` rows including the gaps between them
    pub fn rows_height(&self, rows: usize) -> f32 {
        if rows == 0 {
            return 0.0;
        }
        rows as f32 * self.node.width() + (rows - 1) as f32 * self.row_spacing
    }

    /// Width of one full row including the gaps between nodes
    pub fn row_width(&self) -> f32 {
        self.max_per_row as f32 * self.node.length()
            + (self.max_per_row - 1) as f32 * self.node_spacing
    }

    /// Distance between the centers of neighbouring nodes on a row
    pub(crate) fn node_pitch(&self) -> f32 {
        self.node.length() + self.node_spacing
    }
}
