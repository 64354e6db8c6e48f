//! linkviz - A visualizer for singly, doubly and circularly linked lists
//!
//! This library lays out a linked list as a grid of rounded nodes that wraps
//! back and forth across the canvas, routes the connectors between them and
//! renders the result to SVG. A [`session::Session`] holds the list being
//! edited; command scripts drive it the way a control panel would.

pub mod config;
pub mod export;
pub mod layout;
pub mod palette;
pub mod session;

mod error;

pub use linkviz_core::{check, color, control, draw, geometry, list};
pub use linkviz_script::Script;

pub use error::LinkvizError;

use log::{debug, info};

use config::AppConfig;
use export::svg::{Svg, SvgBuilder};
use session::Session;

/// Entry point for scripting and rendering list visualizations.
///
/// # Examples
///
/// ```
/// use linkviz::{Visualizer, config::AppConfig};
///
/// let visualizer = Visualizer::new(AppConfig::default().with_seed(11));
/// let script = visualizer.parse("variant circular\nclear\ncreate 5 5 5\nsearch 5\n")?;
///
/// let mut session = visualizer.new_session()?;
/// session.replay(&script);
/// assert_eq!(session.values(), vec![5, 5, 5]);
///
/// let svg = visualizer.render_svg(&session)?;
/// assert!(svg.starts_with("<svg"));
/// # Ok::<(), linkviz::LinkvizError>(())
/// ```
#[derive(Debug, Default)]
pub struct Visualizer {
    config: AppConfig,
}

impl Visualizer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a command script.
    ///
    /// # Errors
    ///
    /// Returns [`LinkvizError::Script`] holding every syntax error in the
    /// script along with the source they refer to.
    pub fn parse(&self, source: &str) -> Result<Script, LinkvizError> {
        info!("Parsing command script");
        let script = linkviz_script::parse(source)
            .map_err(|err| LinkvizError::new_script_error(err, source))?;
        debug!(
            events = script.events().len(),
            warnings = script.warnings().len();
            "Script parsed"
        );
        Ok(script)
    }

    /// Start a session with the configured list variant and length.
    ///
    /// # Errors
    ///
    /// Returns [`LinkvizError`] if the configuration is unusable.
    pub fn new_session(&self) -> Result<Session, LinkvizError> {
        Session::new(&self.config)
    }

    /// Builds an SVG exporter writing to `file_name`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkvizError::Config`] if the background color is invalid.
    pub fn svg_exporter(&self, file_name: impl AsRef<std::path::Path>) -> Result<Svg, LinkvizError> {
        let style = self.config.style();
        let background = style.background_color().map_err(LinkvizError::Config)?;
        Ok(SvgBuilder::new(file_name)
            .with_params(self.config.layout().params())
            .with_style(style.connector_style())
            .with_background(background)
            .build())
    }

    /// Render the session's current scene to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`LinkvizError::Config`] if the background color is invalid.
    pub fn render_svg(&self, session: &Session) -> Result<String, LinkvizError> {
        info!(
            variant:% = session.variant(),
            nodes = session.len();
            "Rendering scene"
        );
        let svg = self.svg_exporter("")?;
        Ok(svg.render_scene(session.scene()).to_string())
    }
}
