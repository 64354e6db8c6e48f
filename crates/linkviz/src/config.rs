//! Configuration types for linkviz sessions and rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field is optional; missing fields take the defaults
//! listed on each section.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Canvas, node and spacing dimensions.
//! - [`StyleConfig`] - Colors, line width and marker sizes.
//! - [`ListConfig`] - Starting list variant and value generation.
//!
//! # Example
//!
//! ```
//! # use linkviz::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.layout().params().max_nodes(), 25);
//! ```

use serde::Deserialize;

use linkviz_core::{
    color::Color,
    draw::NodeSize,
    geometry::Size,
    list::{DEFAULT_LENGTH, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, ListVariant, ValueSource},
};

use crate::{
    layout::{ConnectorStyle, CurveRatio, LayoutParams},
    palette::{DEFAULT_NODE_COLORS, DEFAULT_TEXT_COLORS, Palette, TerminalColors, TerminalScope},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// List configuration section.
    #[serde(default)]
    list: ListConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig, list: ListConfig) -> Self {
        Self {
            layout,
            style,
            list,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the list configuration.
    pub fn list(&self) -> &ListConfig {
        &self.list
    }

    /// Returns a copy with the starting list variant replaced.
    pub fn with_variant(mut self, variant: ListVariant) -> Self {
        self.list.variant = variant;
        self
    }

    /// Returns a copy with the value generator seed replaced.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.list.seed = Some(seed);
        self
    }
}

/// Canvas and node dimensions.
///
/// Defaults: a 1000×700 canvas with margins of 110 (sides) and 150 (top and
/// bottom), rows of at most 5 nodes, at most 25 nodes, 80×30 nodes with a
/// corner radius of 15.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    canvas_width: f32,
    canvas_height: f32,
    margin_width: f32,
    margin_height: f32,
    max_per_row: usize,
    max_nodes: usize,
    node_length: f32,
    node_width: f32,
    corner_radius: f32,
    row_spacing: f32,
    node_spacing: f32,
    /// Straight part of a row-wrap curve, relative to the row step.
    direct_ratio: f32,
    /// Bulge of a row-wrap curve, relative to the row step.
    depth_ratio: f32,
    /// How far the closing edge of a ring runs out before turning back.
    return_lead: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let params = LayoutParams::default();
        let node = params.node();
        Self {
            canvas_width: params.canvas().width(),
            canvas_height: params.canvas().height(),
            margin_width: params.margin().width(),
            margin_height: params.margin().height(),
            max_per_row: params.max_per_row(),
            max_nodes: params.max_nodes(),
            node_length: node.length(),
            node_width: node.width(),
            corner_radius: node.corner_radius(),
            row_spacing: params.row_spacing(),
            node_spacing: params.node_spacing(),
            direct_ratio: params.curve().direct(),
            depth_ratio: params.curve().depth(),
            return_lead: params.return_lead(),
        }
    }
}

impl LayoutConfig {
    /// Builds the layout parameters described by this section.
    pub fn params(&self) -> LayoutParams {
        LayoutParams::default()
            .with_canvas(Size::new(self.canvas_width, self.canvas_height))
            .with_margin(Size::new(self.margin_width, self.margin_height))
            .with_max_per_row(self.max_per_row)
            .with_max_nodes(self.max_nodes)
            .with_node(NodeSize::new(
                self.node_length,
                self.node_width,
                self.corner_radius,
            ))
            .with_row_spacing(self.row_spacing)
            .with_node_spacing(self.node_spacing)
            .with_curve(CurveRatio::new(self.direct_ratio, self.depth_ratio))
            .with_return_lead(self.return_lead)
    }
}

/// Visual styling.
///
/// Colors are CSS color strings and are parsed on access.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color of exported images; transparent if unset.
    background_color: Option<String>,
    line_width: f32,
    marker_radius: f32,
    marker_stroke_width: f32,
    arrow_base: f32,
    arrow_height: f32,
    /// Repeating node fill colors.
    node_colors: Vec<String>,
    /// Repeating node text and connector colors.
    text_colors: Vec<String>,
    /// Which list variants get `terminal_node_color` on their last node.
    terminal_scope: TerminalScope,
    terminal_node_color: Option<String>,
    terminal_text_color: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let connector = ConnectorStyle::default();
        Self {
            background_color: None,
            line_width: connector.line_width(),
            marker_radius: connector.marker_radius(),
            marker_stroke_width: connector.marker_stroke_width(),
            arrow_base: connector.arrow_base(),
            arrow_height: connector.arrow_height(),
            node_colors: DEFAULT_NODE_COLORS.iter().map(|c| c.to_string()).collect(),
            text_colors: DEFAULT_TEXT_COLORS.iter().map(|c| c.to_string()).collect(),
            terminal_scope: TerminalScope::Off,
            terminal_node_color: None,
            terminal_text_color: None,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the stroke and marker dimensions.
    pub fn connector_style(&self) -> ConnectorStyle {
        ConnectorStyle::new(
            self.line_width,
            self.marker_radius,
            self.marker_stroke_width,
            self.arrow_base,
            self.arrow_height,
        )
    }

    /// Builds the palette described by this section.
    ///
    /// The terminal colors default to the first palette entries when the
    /// scope is set but a color is not.
    ///
    /// # Errors
    ///
    /// Returns an error if a color cannot be parsed or a color list is empty.
    pub fn palette(&self) -> Result<Palette, String> {
        let node_colors = Color::parse_all(self.node_colors.as_slice())
            .map_err(|err| format!("Invalid node color in config: {err}"))?;
        let text_colors = Color::parse_all(self.text_colors.as_slice())
            .map_err(|err| format!("Invalid text color in config: {err}"))?;
        let palette = Palette::new(node_colors, text_colors)?;

        if self.terminal_scope == TerminalScope::Off {
            return Ok(palette);
        }
        let parse_terminal = |color: &Option<String>, fallback: Color| {
            color
                .as_deref()
                .map(Color::new)
                .transpose()
                .map(|color| color.unwrap_or(fallback))
                .map_err(|err| format!("Invalid terminal color in config: {err}"))
        };
        let shape = parse_terminal(&self.terminal_node_color, palette.node_color(1))?;
        let text = parse_terminal(&self.terminal_text_color, palette.text_color(1))?;
        Ok(palette.with_terminal(TerminalColors::new(self.terminal_scope, shape, text)))
    }
}

/// Starting list and value generation.
///
/// Defaults: a single list of 10 values drawn from `1..=100`, unseeded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    variant: ListVariant,
    default_length: usize,
    min_value: i64,
    max_value: i64,
    /// Seed for generated values; fresh entropy if unset.
    seed: Option<u64>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            variant: ListVariant::default(),
            default_length: DEFAULT_LENGTH,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            seed: None,
        }
    }
}

impl ListConfig {
    /// The variant a session starts with
    pub fn variant(&self) -> ListVariant {
        self.variant
    }

    /// Number of elements in a freshly created list
    pub fn default_length(&self) -> usize {
        self.default_length
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Builds the generator for values the user does not supply.
    pub fn value_source(&self) -> ValueSource {
        ValueSource::new(self.min_value, self.max_value, self.seed)
    }
}
