//! Interactive visualization session.
//!
//! A [`Session`] owns the current list, its laid-out [`Scene`] and the value
//! generator. Control events are applied one at a time; every event that
//! changes the list rebuilds the scene from a fresh snapshot of its values.
//!
//! The list types clamp bad input silently. A session is stricter, in the
//! way a dialog-driven front end would be: it checks each event's arguments
//! first and refuses the operation with an [`OperationError`] instead of
//! guessing.

use log::{debug, info, warn};
use thiserror::Error;

use linkviz_core::{
    check::{self, Fallback, USER_VALUE_MAX, USER_VALUE_MIN},
    control::ControlEvent,
    list::{self, Fill, LinkedSequence, ListVariant, ValueSource},
};
use linkviz_script::{Script, Span};

use crate::{
    LinkvizError,
    config::AppConfig,
    layout::{LayoutEngine, LayoutError, LayoutParams, LayoutValidator, Scene},
    palette::Palette,
};

/// Why a control event was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    /// An argument was missing or outside its accepted range.
    #[error("invalid {argument} for `{operation}`: {reason}")]
    InvalidInput {
        operation: &'static str,
        argument: &'static str,
        reason: Fallback,
    },

    /// The operation would grow the list beyond what the canvas holds.
    #[error("cannot grow the list beyond {max} nodes")]
    CapacityExceeded { max: usize },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl OperationError {
    fn invalid(operation: &'static str, argument: &'static str, reason: Fallback) -> Self {
        Self::InvalidInput {
            operation,
            argument,
            reason,
        }
    }
}

/// What applying a control event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The list changed and the scene was rebuilt.
    Redraw,
    /// A search finished; holds the ascending 1-based positions of matches.
    Found(Vec<usize>),
    /// The event was accepted but had nothing to do.
    Unchanged,
}

/// The result of one scripted event.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    span: Span,
    event: ControlEvent,
    result: Result<Outcome, OperationError>,
}

impl Step {
    /// Source span of the command that produced the event
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn event(&self) -> &ControlEvent {
        &self.event
    }

    pub fn result(&self) -> &Result<Outcome, OperationError> {
        &self.result
    }
}

/// A list being visualized, together with its current scene.
///
/// # Examples
///
/// ```
/// # use linkviz::{config::AppConfig, session::{Outcome, Session}};
/// # use linkviz_core::control::ControlEvent;
/// let mut session = Session::new(&AppConfig::default().with_seed(7)).unwrap();
/// assert_eq!(session.len(), 10);
///
/// session.apply(&ControlEvent::Clear).unwrap();
/// session
///     .apply(&ControlEvent::Create { length: None, random: false, values: vec![3, 7, 2] })
///     .unwrap();
/// session.apply(&ControlEvent::Insert { index: Some(1), value: Some(9) }).unwrap();
///
/// assert_eq!(session.values(), vec![3, 9, 7, 2]);
/// assert_eq!(session.scene().connectors().len(), 3);
/// ```
#[derive(Debug)]
pub struct Session {
    engine: LayoutEngine,
    palette: Palette,
    default_length: usize,
    source: ValueSource,
    list: Box<dyn LinkedSequence>,
    scene: Scene,
}

impl Session {
    /// Creates a session holding a freshly generated list of the configured
    /// variant and default length.
    ///
    /// # Errors
    ///
    /// Returns [`LinkvizError::Layout`] if the layout parameters do not fit
    /// the canvas, and [`LinkvizError::Config`] if the palette is invalid or
    /// the default length exceeds the node limit.
    pub fn new(config: &AppConfig) -> Result<Self, LinkvizError> {
        let params = config.layout().params();
        LayoutValidator::check(&params).map_err(LayoutError::from)?;

        let palette = config.style().palette().map_err(LinkvizError::Config)?;
        let default_length = config.list().default_length();
        if default_length > params.max_nodes() {
            return Err(LinkvizError::Config(format!(
                "default list length {default_length} exceeds the limit of {} nodes",
                params.max_nodes()
            )));
        }

        let engine = LayoutEngine::new(params);
        let variant = config.list().variant();
        let mut session = Self {
            scene: engine.layout(&[], variant)?,
            engine,
            palette,
            default_length,
            source: config.list().value_source(),
            list: list::new_list(variant),
        };
        session.switch_variant(variant)?;
        info!(variant:% = variant, len = session.len(); "Session started");
        Ok(session)
    }

    pub fn params(&self) -> &LayoutParams {
        self.engine.params()
    }

    pub fn variant(&self) -> ListVariant {
        self.list.variant()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the list values in order
    pub fn values(&self) -> Vec<i64> {
        self.list.to_values()
    }

    /// The list being visualized
    pub fn list(&self) -> &dyn LinkedSequence {
        self.list.as_ref()
    }

    /// The colored scene of the current list
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Discards the current list and starts a fresh one of `variant`, filled
    /// with the default number of generated values.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the new list cannot be laid out.
    pub fn switch_variant(&mut self, variant: ListVariant) -> Result<(), LayoutError> {
        let mut list = list::new_list(variant);
        list.create(Some(self.default_length), Fill::Random, &mut self.source);
        self.list = list;
        self.redraw()
    }

    /// Applies one control event.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for missing or out-of-range
    /// arguments and [`OperationError::CapacityExceeded`] if the list would
    /// grow beyond the node limit. The list is unchanged in both cases.
    pub fn apply(&mut self, event: &ControlEvent) -> Result<Outcome, OperationError> {
        info!(event:% = event; "Applying control event");
        let outcome = match event {
            ControlEvent::SelectVariant(variant) => {
                self.switch_variant(*variant)?;
                Outcome::Redraw
            }
            ControlEvent::Create {
                length,
                random,
                values,
            } => self.create(*length, *random, values)?,
            ControlEvent::Insert { index, value } => self.insert(*index, *value)?,
            ControlEvent::Search { value } => {
                let value = require_value("search", *value)?;
                let found = self.list.find_all(value);
                info!(value = value, matches = found.len(); "Search finished");
                Outcome::Found(found)
            }
            ControlEvent::Delete { index } => {
                let index = self.require_position("delete", *index)?;
                let removed = self.list.delete_at(index);
                debug!(index = index, removed:? = removed; "Deleted element");
                self.redraw()?;
                Outcome::Redraw
            }
            ControlEvent::Modify { index, value } => {
                let index = self.require_position("modify", *index)?;
                let value = require_value("modify", *value)?;
                let previous = self.list.set_value_at(index, value);
                debug!(index = index, value = value, previous:? = previous; "Modified element");
                self.redraw()?;
                Outcome::Redraw
            }
            ControlEvent::Clear => {
                self.list.clear();
                self.redraw()?;
                Outcome::Redraw
            }
        };
        Ok(outcome)
    }

    /// Applies every event of a script in order.
    ///
    /// A refused event is recorded and replay carries on with the next one,
    /// so the returned steps line up one to one with the script's events.
    pub fn replay(&mut self, script: &Script) -> Vec<Step> {
        script
            .events()
            .iter()
            .map(|event| {
                let result = self.apply(event.inner());
                if let Err(err) = &result {
                    warn!(span:% = event.span(), err:% = err; "Event refused");
                }
                Step {
                    span: event.span(),
                    event: event.inner().clone(),
                    result,
                }
            })
            .collect()
    }

    fn create(
        &mut self,
        length: Option<i64>,
        random: bool,
        values: &[i64],
    ) -> Result<Outcome, OperationError> {
        let max = self.params().max_nodes();
        if !random {
            for value in values {
                require_value("create", Some(*value))?;
            }
        }

        let length = match length {
            Some(given) => {
                let length = usize::try_from(given).map_err(|_| {
                    OperationError::invalid(
                        "create",
                        "length",
                        Fallback::OutOfRange {
                            given,
                            min: 0,
                            max: max as i64,
                        },
                    )
                })?;
                Some(length)
            }
            None if !random && !values.is_empty() => Some(values.len()),
            None => None,
        }
        .unwrap_or(self.default_length);
        if length > max {
            return Err(OperationError::CapacityExceeded { max });
        }

        if !self.list.is_empty() {
            warn!(len = self.len(); "Create ignored on a populated list");
            return Ok(Outcome::Unchanged);
        }
        let fill = if random {
            Fill::Random
        } else {
            Fill::Values(values.to_vec())
        };
        self.list.create(Some(length), fill, &mut self.source);
        self.redraw()?;
        Ok(Outcome::Redraw)
    }

    fn insert(&mut self, index: Option<i64>, value: Option<i64>) -> Result<Outcome, OperationError> {
        let len = self.len();
        let index = check::require_in_range(index, 0, len as i64)
            .map_err(|reason| OperationError::invalid("insert", "index", reason))?;
        let value = require_value("insert", value)?;

        let max = self.params().max_nodes();
        if len >= max {
            return Err(OperationError::CapacityExceeded { max });
        }

        let insertion = self
            .list
            .insert_after(Some(index), Some(value), &mut self.source);
        debug!(position = insertion.position(), value = value; "Inserted element");
        self.redraw()?;
        Ok(Outcome::Redraw)
    }

    /// Requires an index naming an existing element.
    fn require_position(&self, operation: &'static str, index: Option<i64>) -> Result<i64, OperationError> {
        check::require_in_range(index, 1, self.len() as i64)
            .map_err(|reason| OperationError::invalid(operation, "index", reason))
    }

    /// Rebuilds and recolors the scene from the current values.
    fn redraw(&mut self) -> Result<(), LayoutError> {
        let mut scene = self.engine.layout(&self.list.to_values(), self.list.variant())?;
        self.palette.apply(&mut scene);
        self.scene = scene;
        Ok(())
    }
}

/// Requires a value a user may type.
fn require_value(operation: &'static str, value: Option<i64>) -> Result<i64, OperationError> {
    check::require_in_range(value, USER_VALUE_MIN, USER_VALUE_MAX)
        .map_err(|reason| OperationError::invalid(operation, "value", reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(variant: ListVariant, values: &[i64]) -> Session {
        let config = AppConfig::default().with_variant(variant).with_seed(42);
        let mut session = Session::new(&config).unwrap();
        session.apply(&ControlEvent::Clear).unwrap();
        if !values.is_empty() {
            session
                .apply(&ControlEvent::Create {
                    length: None,
                    random: false,
                    values: values.to_vec(),
                })
                .unwrap();
        }
        session
    }

    #[test]
    fn test_new_session_has_default_list() {
        let session = Session::new(&AppConfig::default().with_seed(1)).unwrap();
        assert_eq!(session.variant(), ListVariant::Single);
        assert_eq!(session.len(), 10);
        assert_eq!(session.scene().nodes().len(), 10);
        assert!(session.values().iter().all(|v| (1..=100).contains(v)));
    }

    #[test]
    fn test_insert_scenario() {
        let mut session = session_with(ListVariant::Single, &[3, 7, 2]);
        let outcome = session
            .apply(&ControlEvent::Insert {
                index: Some(1),
                value: Some(9),
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Redraw);
        assert_eq!(session.values(), vec![3, 9, 7, 2]);
        assert_eq!(session.scene().connectors().len(), 3);
    }

    #[test]
    fn test_search_scenario() {
        let mut session = session_with(ListVariant::Circular, &[5, 5, 5]);
        let outcome = session
            .apply(&ControlEvent::Search { value: Some(5) })
            .unwrap();
        assert_eq!(outcome, Outcome::Found(vec![1, 2, 3]));

        let outcome = session
            .apply(&ControlEvent::Search { value: Some(6) })
            .unwrap();
        assert_eq!(outcome, Outcome::Found(vec![]));
    }

    #[test]
    fn test_delete_scenario() {
        let mut session = session_with(ListVariant::Dual, &[10, 20, 30]);
        session
            .apply(&ControlEvent::Delete { index: Some(2) })
            .unwrap();
        assert_eq!(session.values(), vec![10, 30]);
        assert_eq!(
            session
                .apply(&ControlEvent::Search { value: Some(20) })
                .unwrap(),
            Outcome::Found(vec![])
        );
    }

    #[test]
    fn test_modify() {
        let mut session = session_with(ListVariant::Single, &[1, 2, 3]);
        session
            .apply(&ControlEvent::Modify {
                index: Some(3),
                value: Some(42),
            })
            .unwrap();
        assert_eq!(session.values(), vec![1, 2, 42]);
        assert_eq!(session.scene().nodes()[2].value(), 42);
    }

    #[test]
    fn test_invalid_input_leaves_list_unchanged() {
        let mut session = session_with(ListVariant::Single, &[1, 2, 3]);
        let events = [
            ControlEvent::Insert {
                index: Some(4),
                value: Some(5),
            },
            ControlEvent::Insert {
                index: Some(0),
                value: Some(0),
            },
            ControlEvent::Insert {
                index: None,
                value: Some(5),
            },
            ControlEvent::Delete { index: Some(0) },
            ControlEvent::Delete { index: None },
            ControlEvent::Modify {
                index: Some(4),
                value: Some(1),
            },
            ControlEvent::Modify {
                index: Some(1),
                value: Some(101),
            },
            ControlEvent::Search { value: None },
        ];
        for event in &events {
            let err = session.apply(event).unwrap_err();
            assert!(
                matches!(err, OperationError::InvalidInput { .. }),
                "{event} gave {err}"
            );
        }
        assert_eq!(session.values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_input_message() {
        let mut session = session_with(ListVariant::Single, &[1]);
        let err = session
            .apply(&ControlEvent::Delete { index: Some(5) })
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid index for `delete`: 5 is outside the range 1..=1"
        );
    }

    #[test]
    fn test_insert_capacity() {
        let values: Vec<i64> = (1..=25).collect();
        let mut session = session_with(ListVariant::Single, &values);
        assert_eq!(session.len(), 25);
        let err = session
            .apply(&ControlEvent::Insert {
                index: Some(0),
                value: Some(1),
            })
            .unwrap_err();
        assert_eq!(err, OperationError::CapacityExceeded { max: 25 });
        assert_eq!(session.len(), 25);
    }

    #[test]
    fn test_create_capacity_and_length() {
        let mut session = session_with(ListVariant::Single, &[]);
        assert_eq!(session.len(), 0);
        let err = session
            .apply(&ControlEvent::Create {
                length: Some(26),
                random: true,
                values: vec![],
            })
            .unwrap_err();
        assert_eq!(err, OperationError::CapacityExceeded { max: 25 });

        let err = session
            .apply(&ControlEvent::Create {
                length: Some(-1),
                random: true,
                values: vec![],
            })
            .unwrap_err();
        assert!(matches!(err, OperationError::InvalidInput { .. }));

        session
            .apply(&ControlEvent::Create {
                length: Some(4),
                random: true,
                values: vec![],
            })
            .unwrap();
        assert_eq!(session.len(), 4);
    }

    #[test]
    fn test_bare_create_generates_default_length() {
        let mut session = session_with(ListVariant::Single, &[]);
        assert!(session.is_empty());

        session
            .apply(&ControlEvent::Create {
                length: None,
                random: false,
                values: vec![],
            })
            .unwrap();
        assert_eq!(session.len(), 10);
        assert!(
            session
                .values()
                .iter()
                .all(|v| (list::DEFAULT_MIN_VALUE..=list::DEFAULT_MAX_VALUE).contains(v))
        );
    }

    #[test]
    fn test_create_on_populated_list_is_unchanged() {
        let mut session = session_with(ListVariant::Dual, &[1, 2]);
        let outcome = session
            .apply(&ControlEvent::Create {
                length: None,
                random: true,
                values: vec![],
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(session.values(), vec![1, 2]);
    }

    #[test]
    fn test_switch_variant_starts_fresh() {
        let mut session = session_with(ListVariant::Single, &[1, 2]);
        session
            .apply(&ControlEvent::SelectVariant(ListVariant::Circular))
            .unwrap();
        assert_eq!(session.variant(), ListVariant::Circular);
        assert_eq!(session.len(), 10);
        assert_eq!(session.scene().connectors().len(), 10);
    }

    #[test]
    fn test_clear_empties_scene() {
        let mut session = session_with(ListVariant::Circular, &[1, 2, 3]);
        session.apply(&ControlEvent::Clear).unwrap();
        assert!(session.is_empty());
        assert!(session.scene().is_empty());
        assert!(session.scene().connectors().is_empty());
    }

    #[test]
    fn test_infeasible_config_is_rejected() {
        let config: AppConfig = toml::from_str("[layout]\ncanvas_width = 500.0\n").unwrap();
        let err = Session::new(&config).unwrap_err();
        assert!(matches!(
            err,
            LinkvizError::Layout(LayoutError::Infeasible(_))
        ));
    }

    #[test]
    fn test_default_length_over_limit_is_rejected() {
        let config: AppConfig = toml::from_str("[list]\ndefault_length = 30\n").unwrap();
        assert!(matches!(
            Session::new(&config),
            Err(LinkvizError::Config(_))
        ));
    }

    #[test]
    fn test_replay_continues_after_refusal() {
        let script = linkviz_script::parse("clear\ncreate 3 7 2\ndelete 9\nsearch 7\n").unwrap();
        let mut session = Session::new(&AppConfig::default().with_seed(5)).unwrap();
        let steps = session.replay(&script);

        assert_eq!(steps.len(), 4);
        assert!(matches!(
            steps[2].result(),
            Err(OperationError::InvalidInput { .. })
        ));
        assert_eq!(steps[3].result(), &Ok(Outcome::Found(vec![2])));
        assert_eq!(steps[3].event(), &ControlEvent::Search { value: Some(7) });
        assert_eq!(session.values(), vec![3, 7, 2]);
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let config = AppConfig::default().with_seed(3);
        let a = Session::new(&config).unwrap();
        let b = Session::new(&config).unwrap();
        assert_eq!(a.values(), b.values());
    }
}
