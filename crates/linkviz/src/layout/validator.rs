//! Feasibility checks for layout parameters.

use log::debug;
use thiserror::Error;

use super::LayoutParams;

/// Smallest horizontal slack a full row must leave on the canvas.
const MIN_HORIZONTAL_SLACK: f32 = 5.0;

/// Why a parameter set cannot be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Infeasibility {
    /// Row-wrap curves would reach past the left or right margin.
    #[error("row-wrap curves need {required} of horizontal margin but only {margin} is set")]
    MarginTooNarrow { required: f32, margin: f32 },

    /// A full list does not fit between the top and bottom margins.
    #[error("{rows} rows need a canvas {required} tall but it is {canvas}")]
    CanvasTooShort {
        rows: usize,
        required: f32,
        canvas: f32,
    },

    /// A full row leaves too little room between the side margins.
    #[error("a full row needs a canvas wider than {required} but it is {canvas}")]
    CanvasTooNarrow { required: f32, canvas: f32 },
}

/// Decides whether layout parameters fit their canvas.
///
/// Run once when parameters are chosen, not on every redraw.
///
/// # Examples
///
/// ```
/// # use linkviz::layout::{LayoutParams, LayoutValidator};
/// # use linkviz_core::geometry::Size;
/// assert!(LayoutValidator::is_feasible(&LayoutParams::default()));
///
/// let cramped = LayoutParams::default().with_canvas(Size::new(600.0, 700.0));
/// assert!(!LayoutValidator::is_feasible(&cramped));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutValidator;

impl LayoutValidator {
    /// Returns true if every rule holds
    pub fn is_feasible(params: &LayoutParams) -> bool {
        Self::check(params).is_ok()
    }

    /// Checks every rule in order and reports the first that fails.
    ///
    /// # Errors
    ///
    /// Returns the [`Infeasibility`] describing the first failed rule.
    pub fn check(params: &LayoutParams) -> Result<(), Infeasibility> {
        let node = params.node();
        let curve = params.curve();
        let margin = params.margin();
        let canvas = params.canvas();

        let curve_reach = (params.row_spacing() + node.width()) * (curve.direct() + curve.depth())
            - node.corner_radius();
        if curve_reach > margin.width() {
            debug!(required = curve_reach, margin = margin.width(); "Layout infeasible");
            return Err(Infeasibility::MarginTooNarrow {
                required: curve_reach,
                margin: margin.width(),
            });
        }

        let rows = params.rows_for(params.max_nodes());
        let required_height = params.rows_height(rows) + 2.0 * margin.height();
        if required_height > canvas.height() {
            debug!(rows = rows, required = required_height; "Layout infeasible");
            return Err(Infeasibility::CanvasTooShort {
                rows,
                required: required_height,
                canvas: canvas.height(),
            });
        }

        let required_width = params.row_width() + 2.0 * margin.width();
        if canvas.width() - required_width <= MIN_HORIZONTAL_SLACK {
            debug!(required = required_width; "Layout infeasible");
            return Err(Infeasibility::CanvasTooNarrow {
                required: required_width + MIN_HORIZONTAL_SLACK,
                canvas: canvas.width(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use linkviz_core::geometry::Size;

    use super::*;

    #[test]
    fn test_defaults_are_feasible() {
        assert_eq!(LayoutValidator::check(&LayoutParams::default()), Ok(()));
    }

    #[test]
    fn test_narrow_margin() {
        // (60 + 30) * 0.7 - 15 = 48
        let params = LayoutParams::default().with_margin(Size::new(40.0, 150.0));
        assert!(matches!(
            LayoutValidator::check(&params),
            Err(Infeasibility::MarginTooNarrow { .. })
        ));

        let params = LayoutParams::default().with_margin(Size::new(48.5, 150.0));
        assert!(!matches!(
            LayoutValidator::check(&params),
            Err(Infeasibility::MarginTooNarrow { .. })
        ));
    }

    #[test]
    fn test_too_many_rows() {
        // 25 rows of one node cannot fit 700 pixels
        let params = LayoutParams::default().with_max_per_row(1);
        let Err(Infeasibility::CanvasTooShort { rows, .. }) = LayoutValidator::check(&params)
        else {
            panic!("expected the canvas to be too short");
        };
        assert_eq!(rows, 25);
    }

    #[test]
    fn test_height_boundary() {
        // 5 rows: 5 * 30 + 4 * 60 + 2 * 150 = 690
        let params = LayoutParams::default().with_canvas(Size::new(1000.0, 690.0));
        assert!(LayoutValidator::is_feasible(&params));
        let params = LayoutParams::default().with_canvas(Size::new(1000.0, 689.0));
        assert!(!LayoutValidator::is_feasible(&params));
    }

    #[test]
    fn test_width_needs_slack() {
        // 680 + 220 = 900; slack must exceed 5
        let params = LayoutParams::default().with_canvas(Size::new(905.0, 700.0));
        assert!(matches!(
            LayoutValidator::check(&params),
            Err(Infeasibility::CanvasTooNarrow { .. })
        ));
        let params = LayoutParams::default().with_canvas(Size::new(906.0, 700.0));
        assert!(LayoutValidator::is_feasible(&params));
    }

    #[test]
    fn test_first_failure_is_reported() {
        let params = LayoutParams::default()
            .with_margin(Size::new(10.0, 150.0))
            .with_canvas(Size::new(100.0, 100.0));
        assert!(matches!(
            LayoutValidator::check(&params),
            Err(Infeasibility::MarginTooNarrow { .. })
        ));
    }
}
