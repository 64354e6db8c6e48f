//! SVG rendering of scenes.
//!
//! The document always covers the whole canvas so that successive redraws of
//! a session line up frame by frame. Nodes are drawn first and connectors on
//! top of them, each connector followed by its start and end glyphs.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use linkviz_core::{color::Color, geometry::Size};

use super::{Error, Exporter};
use crate::layout::{ConnectorRouter, ConnectorStyle, LayoutParams, Scene};

/// Builder for [`Svg`] exporters.
///
/// # Examples
///
/// ```
/// # use linkviz::export::svg::SvgBuilder;
/// # use linkviz::layout::LayoutEngine;
/// # use linkviz_core::{color::Color, list::ListVariant};
/// let scene = LayoutEngine::default()
///     .layout(&[3, 7, 2], ListVariant::Dual)
///     .unwrap();
/// let svg = SvgBuilder::new("list.svg")
///     .with_background(Some(Color::new("white").unwrap()))
///     .build();
///
/// let document = svg.render_scene(&scene).to_string();
/// assert!(document.contains("viewBox=\"0 0 1000 700\""));
/// ```
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    file_name: PathBuf,
    params: LayoutParams,
    style: ConnectorStyle,
    background: Option<Color>,
}

impl SvgBuilder {
    /// Creates a builder writing to `file_name` with default dimensions.
    pub fn new(file_name: impl AsRef<Path>) -> Self {
        Self {
            file_name: file_name.as_ref().to_path_buf(),
            params: LayoutParams::default(),
            style: ConnectorStyle::default(),
            background: None,
        }
    }

    /// Sets the layout parameters the scenes were built with
    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the connector stroke and marker dimensions
    pub fn with_style(mut self, style: ConnectorStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the background fill; `None` leaves the canvas transparent
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn build(self) -> Svg {
        Svg {
            file_name: self.file_name,
            canvas: self.params.canvas(),
            router: ConnectorRouter::new(self.params).with_style(self.style),
            background: self.background,
        }
    }
}

/// SVG exporter for scenes.
#[derive(Debug, Clone)]
pub struct Svg {
    file_name: PathBuf,
    canvas: Size,
    router: ConnectorRouter,
    background: Option<Color>,
}

impl Svg {
    /// Renders a scene to an SVG document spanning the canvas.
    pub fn render_scene(&self, scene: &Scene) -> Document {
        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", self.canvas.width(), self.canvas.height()),
            )
            .set("width", self.canvas.width())
            .set("height", self.canvas.height());
        let mut doc = self.add_background(doc);

        let nodes = scene
            .nodes()
            .iter()
            .fold(svg_element::Group::new().set("class", "nodes"), |group, node| {
                group.add(node.render_to_svg())
            });
        doc = doc.add(nodes);

        let line_width = self.router.style().line_width();
        let mut connectors = svg_element::Group::new().set("class", "connectors");
        for descriptor in scene.connectors() {
            let path = self.router.path(descriptor);
            connectors = connectors.add(path.render_to_svg(descriptor.colors().line(), line_width));
            for glyph in self.router.glyphs(descriptor) {
                connectors = connectors.add(glyph.render_to_svg());
            }
        }
        debug!(
            nodes = scene.nodes().len(),
            connectors = scene.connectors().len();
            "Scene rendered"
        );
        doc.add(connectors)
    }

    fn add_background(&self, doc: Document) -> Document {
        let Some(color) = &self.background else {
            return doc;
        };
        doc.add(
            svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", self.canvas.width())
                .set("height", self.canvas.height())
                .set("fill", color),
        )
    }

    /// Writes an SVG document to the configured file.
    pub fn write_document(&self, doc: &Document) -> Result<(), Error> {
        let file_name = self.file_name.display();
        info!(file_name:% = file_name; "Creating SVG file");
        let mut f = File::create(&self.file_name).map_err(|err| {
            error!(file_name:% = file_name, err:err; "Failed to create SVG file");
            Error::Io(err)
        })?;

        write!(f, "{doc}").map_err(|err| {
            error!(file_name:% = file_name, err:err; "Failed to write SVG content");
            Error::Io(err)
        })
    }
}

impl Exporter for Svg {
    fn export_scene(&mut self, scene: &Scene) -> Result<(), Error> {
        let doc = self.render_scene(scene);
        self.write_document(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layout::LayoutEngine, palette::Palette};
    use linkviz_core::list::ListVariant;

    fn render(values: &[i64], variant: ListVariant, background: Option<Color>) -> String {
        let mut scene = LayoutEngine::default().layout(values, variant).unwrap();
        Palette::default().apply(&mut scene);
        SvgBuilder::new("unused.svg")
            .with_background(background)
            .build()
            .render_scene(&scene)
            .to_string()
    }

    #[test]
    fn test_single_list_elements() {
        let svg = render(&[3, 7, 2], ListVariant::Single, None);
        // one node rect per value and no background
        assert_eq!(svg.matches("<rect").count(), 3);
        assert_eq!(svg.matches("<path").count(), 2);
        // every connector has a start circle and an arrowhead
        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("<polygon").count(), 2);
        assert_eq!(svg.matches("<text").count(), 3);
    }

    #[test]
    fn test_dual_list_has_two_arrowheads() {
        let svg = render(&[3, 7, 2], ListVariant::Dual, None);
        assert_eq!(svg.matches("<circle").count(), 0);
        assert_eq!(svg.matches("<polygon").count(), 4);
    }

    #[test]
    fn test_circular_list_closes_ring() {
        let svg = render(&[1, 2, 3], ListVariant::Circular, None);
        assert_eq!(svg.matches("<path").count(), 3);
    }

    #[test]
    fn test_background() {
        let svg = render(&[], ListVariant::Single, Some(Color::new("white").unwrap()));
        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(svg.contains("width=\"1000\""));
        assert!(svg.contains("height=\"700\""));
    }

    #[test]
    fn test_connector_colors() {
        let svg = render(&[1, 2], ListVariant::Single, None);
        let stroke = Color::new("#AE1955").unwrap().to_string();
        assert!(svg.contains(&format!("stroke=\"{stroke}\"")));
    }
}
