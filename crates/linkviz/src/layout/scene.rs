use log::trace;

use linkviz_core::{
    color::Color,
    draw::{ConnectorColors, ConnectorDescriptor, NodeGraph},
    list::ListVariant,
};

/// The positioned nodes and connectors of one redraw.
///
/// Connector `i` leaves node `i`; for a circular list the last connector
/// leaves the last node and closes the ring. A scene holds no reference to
/// the list it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    variant: ListVariant,
    nodes: Vec<NodeGraph>,
    connectors: Vec<ConnectorDescriptor>,
}

impl Scene {
    pub(crate) fn new(
        variant: ListVariant,
        nodes: Vec<NodeGraph>,
        connectors: Vec<ConnectorDescriptor>,
    ) -> Self {
        Self {
            variant,
            nodes,
            connectors,
        }
    }

    /// The list variant the scene depicts
    pub fn variant(&self) -> ListVariant {
        self.variant
    }

    pub fn nodes(&self) -> &[NodeGraph] {
        &self.nodes
    }

    pub fn connectors(&self) -> &[ConnectorDescriptor] {
        &self.connectors
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Recolors the node at 1-based `index`.
    ///
    /// Returns false and changes nothing if there is no such node.
    pub fn set_node_color(&mut self, index: usize, shape: Color, text: Color) -> bool {
        let Some(node) = index.checked_sub(1).and_then(|i| self.nodes.get_mut(i)) else {
            trace!(index = index; "Ignoring color for missing node");
            return false;
        };
        node.set_colors(shape, text);
        true
    }

    /// Recolors the connector at 1-based `index`.
    ///
    /// Returns false and changes nothing if there is no such connector.
    pub fn set_connector_color(&mut self, index: usize, colors: ConnectorColors) -> bool {
        let Some(connector) = index.checked_sub(1).and_then(|i| self.connectors.get_mut(i))
        else {
            trace!(index = index; "Ignoring color for missing connector");
            return false;
        };
        connector.set_colors(colors);
        true
    }
}
