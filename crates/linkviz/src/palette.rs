//! Post-layout coloring.
//!
//! A [`Palette`] is applied to a freshly laid-out [`Scene`]. Node `i` takes
//! the `i`-th entry of a short repeating list of fill and text colors, and
//! the connector leaving node `i` is drawn in that node's text color with a
//! white interior.

use log::debug;
use serde::Deserialize;

use linkviz_core::{color::Color, draw::ConnectorColors, list::ListVariant};

use crate::layout::Scene;

/// Node fill colors, repeated every five nodes.
pub const DEFAULT_NODE_COLORS: [&str; 5] = ["#F27A7B", "#FDD244", "#E2B3FD", "#4091E1", "#9CFDE2"];

/// Node text and connector colors, repeated every five nodes.
pub const DEFAULT_TEXT_COLORS: [&str; 5] = ["#AE1955", "#225BC3", "#6C2FB9", "#FD9BD0", "#417DA1"];

const DEFAULT_INTERIOR: &str = "#FFFFFF";

/// Which list variants get their last node recolored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalScope {
    /// The last node keeps its palette color (default)
    #[default]
    Off,
    /// Single and dual lists
    Linear,
    /// Circular lists
    Circular,
    /// Every variant
    All,
}

impl TerminalScope {
    /// Returns true if a scene of `variant` gets the terminal colors
    pub fn applies_to(self, variant: ListVariant) -> bool {
        match self {
            Self::Off => false,
            Self::Linear => variant != ListVariant::Circular,
            Self::Circular => variant == ListVariant::Circular,
            Self::All => true,
        }
    }
}

/// Colors that replace the palette entry of a list's last node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalColors {
    scope: TerminalScope,
    shape: Color,
    text: Color,
}

impl TerminalColors {
    pub fn new(scope: TerminalScope, shape: Color, text: Color) -> Self {
        Self { scope, shape, text }
    }

    pub fn scope(&self) -> TerminalScope {
        self.scope
    }
}

/// A repeating set of node and connector colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    node_colors: Vec<Color>,
    text_colors: Vec<Color>,
    interior: Color,
    terminal: Option<TerminalColors>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            node_colors: Color::parse_all(&DEFAULT_NODE_COLORS)
                .expect("default node colors are valid CSS colors"),
            text_colors: Color::parse_all(&DEFAULT_TEXT_COLORS)
                .expect("default text colors are valid CSS colors"),
            interior: Color::new(DEFAULT_INTERIOR).expect("'#FFFFFF' is a valid CSS color"),
            terminal: None,
        }
    }
}

impl Palette {
    /// Creates a palette from fill and text color lists.
    ///
    /// The lists may differ in length; each repeats on its own.
    ///
    /// # Errors
    ///
    /// Returns an error if either list is empty.
    pub fn new(node_colors: Vec<Color>, text_colors: Vec<Color>) -> Result<Self, String> {
        if node_colors.is_empty() || text_colors.is_empty() {
            return Err("palette needs at least one node color and one text color".to_string());
        }
        Ok(Self {
            node_colors,
            text_colors,
            ..Self::default()
        })
    }

    /// Sets the fill inside start circles (builder style).
    pub fn with_interior(mut self, interior: Color) -> Self {
        self.interior = interior;
        self
    }

    /// Recolors the last node of matching scenes (builder style).
    pub fn with_terminal(mut self, terminal: TerminalColors) -> Self {
        self.terminal = Some(terminal);
        self
    }

    /// Fill color of the node at 1-based `index`
    pub fn node_color(&self, index: usize) -> Color {
        self.node_colors[index.saturating_sub(1) % self.node_colors.len()]
    }

    /// Text color of the node at 1-based `index`
    pub fn text_color(&self, index: usize) -> Color {
        self.text_colors[index.saturating_sub(1) % self.text_colors.len()]
    }

    /// Colors the nodes and connectors of a scene.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linkviz::{layout::LayoutEngine, palette::Palette};
    /// # use linkviz_core::list::ListVariant;
    /// let mut scene = LayoutEngine::default()
    ///     .layout(&[1, 2, 3, 4, 5, 6], ListVariant::Single)
    ///     .unwrap();
    /// let palette = Palette::default();
    /// palette.apply(&mut scene);
    ///
    /// // the sixth node repeats the first color
    /// assert_eq!(scene.nodes()[5].shape_color(), scene.nodes()[0].shape_color());
    /// ```
    pub fn apply(&self, scene: &mut Scene) {
        let count = scene.nodes().len();
        for index in 1..=count {
            let text = self.text_color(index);
            scene.set_node_color(index, self.node_color(index), text);
            scene.set_connector_color(index, ConnectorColors::uniform(text, self.interior));
        }

        if let Some(terminal) = self
            .terminal
            .filter(|terminal| terminal.scope.applies_to(scene.variant()))
        {
            scene.set_node_color(count, terminal.shape, terminal.text);
            scene.set_connector_color(count, ConnectorColors::uniform(terminal.text, self.interior));
        }
        debug!(nodes = count, variant:% = scene.variant(); "Palette applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutEngine;

    fn color(s: &str) -> Color {
        Color::new(s).unwrap()
    }

    fn colored(values: &[i64], variant: ListVariant, palette: &Palette) -> Scene {
        let mut scene = LayoutEngine::default().layout(values, variant).unwrap();
        palette.apply(&mut scene);
        scene
    }

    #[test]
    fn test_palette_cycles_by_index() {
        let palette = Palette::default();
        assert_eq!(palette.node_color(1), color("#F27A7B"));
        assert_eq!(palette.node_color(5), color("#9CFDE2"));
        assert_eq!(palette.node_color(6), color("#F27A7B"));
        assert_eq!(palette.text_color(7), color("#225BC3"));
    }

    #[test]
    fn test_connectors_take_text_color() {
        let scene = colored(&[1, 2, 3], ListVariant::Single, &Palette::default());
        let colors = scene.connectors()[1].colors();
        assert_eq!(colors.line(), color("#225BC3"));
        assert_eq!(colors.start(), color("#225BC3"));
        assert_eq!(colors.end(), color("#225BC3"));
        assert_eq!(colors.start_interior(), color("#FFFFFF"));
    }

    #[test]
    fn test_circular_closing_edge_colored_by_last_node() {
        let scene = colored(&[1, 2, 3], ListVariant::Circular, &Palette::default());
        assert_eq!(scene.connectors()[2].colors().line(), color("#6C2FB9"));
    }

    #[test]
    fn test_terminal_override_off_by_default() {
        let scene = colored(&[1, 2], ListVariant::Dual, &Palette::default());
        assert_eq!(scene.nodes()[1].shape_color(), color("#FDD244"));
    }

    #[test]
    fn test_terminal_override_scope() {
        let palette = Palette::default().with_terminal(TerminalColors::new(
            TerminalScope::Linear,
            color("gray"),
            color("black"),
        ));

        let linear = colored(&[1, 2], ListVariant::Single, &palette);
        assert_eq!(linear.nodes()[1].shape_color(), color("gray"));
        assert_eq!(linear.nodes()[0].shape_color(), color("#F27A7B"));

        let ring = colored(&[1, 2], ListVariant::Circular, &palette);
        assert_eq!(ring.nodes()[1].shape_color(), color("#FDD244"));
    }

    #[test]
    fn test_terminal_override_on_empty_scene() {
        let palette = Palette::default().with_terminal(TerminalColors::new(
            TerminalScope::All,
            color("gray"),
            color("black"),
        ));
        let scene = colored(&[], ListVariant::Circular, &palette);
        assert!(scene.is_empty());
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(Palette::new(vec![], vec![color("red")]).is_err());
        let palette = Palette::new(vec![color("red")], vec![color("blue"), color("green")]).unwrap();
        assert_eq!(palette.node_color(3), color("red"));
        assert_eq!(palette.text_color(3), color("blue"));
    }
}
