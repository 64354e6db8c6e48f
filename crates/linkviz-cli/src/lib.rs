//! linkviz CLI library
//!
//! This module contains the core CLI logic for the linkviz list visualizer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use linkviz::{LinkvizError, Script, Visualizer, session::Outcome};

/// Run the linkviz CLI application
///
/// Starts a session from the configuration, replays the command script if
/// one is given and writes the SVG of the final scene to the output file.
/// Operations the session refuses are logged and skipped.
///
/// # Errors
///
/// Returns `LinkvizError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Script syntax errors
/// - Layout parameters that do not fit the canvas
pub fn run(args: &Args) -> Result<(), LinkvizError> {
    info!(
        script_path:? = args.script,
        output_path = args.output;
        "Processing script"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(variant) = args.variant {
        app_config = app_config.with_variant(variant);
    }
    if let Some(seed) = args.seed {
        app_config = app_config.with_seed(seed);
    }

    let visualizer = Visualizer::new(app_config);
    let (source, script) = match &args.script {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            let script = visualizer.parse(&source)?;
            (source, script)
        }
        None => (String::new(), Script::default()),
    };
    for diagnostic in script.warnings() {
        let adapter = error_adapter::DiagnosticAdapter::new(diagnostic, &source);
        warn!("Script warning\n{}", error_adapter::render(&adapter));
    }

    let mut session = visualizer.new_session()?;
    for step in session.replay(&script) {
        match step.result() {
            Ok(Outcome::Found(positions)) => {
                info!(event:% = step.event(), positions:? = positions; "Search result");
            }
            Ok(Outcome::Unchanged) => {
                info!(event:% = step.event(); "Nothing to do");
            }
            Ok(Outcome::Redraw) => {}
            Err(err) => {
                let line = step.span().slice(&source).unwrap_or_default().trim();
                warn!(command = line, err:% = err; "Operation rejected");
            }
        }
    }

    let svg = visualizer.render_svg(&session)?;
    fs::write(&args.output, svg)?;

    info!(
        output_file = args.output,
        variant:% = session.variant(),
        nodes = session.len();
        "SVG exported successfully"
    );

    Ok(())
}
