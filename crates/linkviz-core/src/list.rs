//! Linked-list containers visualized by linkviz.
//!
//! # Overview
//!
//! - [`LinkedSequence`] - The operations every list variant supports
//! - [`SingleList`] - Singly linked list with a head sentinel
//! - [`DualList`] - Doubly linked list with a head sentinel
//! - [`CircularList`] - Singly linked ring closed through its head sentinel
//! - [`ValueSource`] - Generator for values the user did not supply
//!
//! All lists store their nodes in an arena and link them by [`NodeId`]. Users
//! address elements by 1-based position; position 0 names the head sentinel,
//! which is never counted or displayed.
//!
//! # Input handling
//!
//! List operations never fail. Out-of-range positions are clamped or ignored
//! as described on each method; see the [`check`](crate::check) module.

mod arena;
mod circular;
mod dual;
mod single;
mod values;

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::check::Checked;

pub use arena::NodeId;
pub use circular::CircularList;
pub use dual::DualList;
pub use single::SingleList;
pub use values::{DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, ValueSource};

/// Number of elements created when no length is given.
pub const DEFAULT_LENGTH: usize = 10;

/// The kinds of linked list that can be visualized.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListVariant {
    /// Singly linked list (default)
    #[default]
    Single,
    /// Doubly linked list
    Dual,
    /// Singly linked list whose last node links back to the first
    Circular,
}

impl ListVariant {
    /// All variants, in menu order
    pub const ALL: [ListVariant; 3] = [Self::Single, Self::Dual, Self::Circular];
}

impl FromStr for ListVariant {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "dual" => Ok(Self::Dual),
            "circular" => Ok(Self::Circular),
            _ => Err("Unsupported list variant"),
        }
    }
}

impl From<ListVariant> for &'static str {
    fn from(val: ListVariant) -> Self {
        match val {
            ListVariant::Single => "single",
            ListVariant::Dual => "dual",
            ListVariant::Circular => "circular",
        }
    }
}

impl fmt::Display for ListVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// How [`LinkedSequence::create`] fills a new list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    /// Every element is generated.
    Random,
    /// Elements are taken from the vector in order; missing ones are generated.
    Values(Vec<i64>),
}

/// Outcome of [`LinkedSequence::insert_after`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    after: Checked<usize>,
    value: Checked<i64>,
}

impl Insertion {
    pub(crate) fn new(after: Checked<usize>, value: Checked<i64>) -> Self {
        Self { after, value }
    }

    /// The position the value was inserted after, with any substitution reason
    pub fn after(&self) -> Checked<usize> {
        self.after
    }

    /// The inserted value, with any substitution reason
    pub fn value(&self) -> Checked<i64> {
        self.value
    }

    /// The 1-based position of the new element
    pub fn position(&self) -> usize {
        self.after.value() + 1
    }
}

/// Sequence operations shared by all list variants.
///
/// Positions are 1-based. The trait is object safe so a session can hold
/// whichever variant the user picked as a `Box<dyn LinkedSequence>`.
pub trait LinkedSequence: fmt::Debug {
    /// Returns which kind of list this is
    fn variant(&self) -> ListVariant;

    /// Returns the number of elements, head sentinel excluded
    fn len(&self) -> usize;

    /// Returns true if the list holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a value after the last element.
    fn push_back(&mut self, value: i64);

    /// Populates an empty list.
    ///
    /// Does nothing and returns `false` if the list already has elements.
    /// `length` defaults to [`DEFAULT_LENGTH`]. With [`Fill::Values`] at most
    /// `length` values are used and the remaining slots are generated.
    fn create(&mut self, length: Option<usize>, fill: Fill, source: &mut ValueSource) -> bool {
        if !self.is_empty() {
            return false;
        }
        let length = length.unwrap_or(DEFAULT_LENGTH);
        let supplied = match fill {
            Fill::Random => Vec::new(),
            Fill::Values(values) => values,
        };
        let mut supplied = supplied.into_iter();
        for _ in 0..length {
            let value = supplied.next().unwrap_or_else(|| source.next_value());
            self.push_back(value);
        }
        true
    }

    /// Inserts a value after the element at `index`.
    ///
    /// `index` 0 makes the value the first element. A missing or out-of-range
    /// index appends, and a missing value is generated.
    fn insert_after(
        &mut self,
        index: Option<i64>,
        value: Option<i64>,
        source: &mut ValueSource,
    ) -> Insertion;

    /// Removes and returns the element at `index`.
    ///
    /// Returns `None` and leaves the list untouched if `index` is outside `1..=len`.
    fn delete_at(&mut self, index: i64) -> Option<i64>;

    /// Returns the value at `index`, or `None` if there is no such element
    fn value_at(&self, index: i64) -> Option<i64>;

    /// Replaces the value at `index`, returning the previous value.
    ///
    /// Returns `None` and changes nothing if there is no such element.
    fn set_value_at(&mut self, index: i64, value: i64) -> Option<i64>;

    /// Returns the ascending 1-based positions of every element equal to `value`
    fn find_all(&self, value: i64) -> Vec<usize> {
        self.to_values()
            .into_iter()
            .enumerate()
            .filter(|(_, v)| *v == value)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Returns the element values in list order
    fn to_values(&self) -> Vec<i64>;

    /// Removes every element and unlinks the head sentinel.
    fn clear(&mut self);

    /// Returns the head sentinel's handle
    fn head(&self) -> NodeId;

    /// Returns the successor of `node`
    fn next(&self, node: NodeId) -> Option<NodeId>;

    /// Returns the predecessor of `node`; only doubly linked lists have one
    fn previous(&self, node: NodeId) -> Option<NodeId>;
}

/// Creates an empty list of the given variant.
///
/// # Examples
///
/// ```
/// # use linkviz_core::list::{self, Fill, ListVariant, ValueSource};
/// let mut list = list::new_list(ListVariant::Dual);
/// let mut source = ValueSource::seeded(1);
/// list.create(Some(3), Fill::Values(vec![3, 7, 2]), &mut source);
///
/// list.insert_after(Some(1), Some(9), &mut source);
/// assert_eq!(list.to_values(), vec![3, 9, 7, 2]);
/// ```
pub fn new_list(variant: ListVariant) -> Box<dyn LinkedSequence> {
    match variant {
        ListVariant::Single => Box::new(SingleList::new()),
        ListVariant::Dual => Box::new(DualList::new()),
        ListVariant::Circular => Box::new(CircularList::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(variant: ListVariant, values: &[i64]) -> Box<dyn LinkedSequence> {
        let mut list = new_list(variant);
        let mut source = ValueSource::seeded(0);
        list.create(Some(values.len()), Fill::Values(values.to_vec()), &mut source);
        list
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("single".parse::<ListVariant>(), Ok(ListVariant::Single));
        assert_eq!("dual".parse::<ListVariant>(), Ok(ListVariant::Dual));
        assert_eq!("circular".parse::<ListVariant>(), Ok(ListVariant::Circular));
        assert!("double".parse::<ListVariant>().is_err());
    }

    #[test]
    fn test_variant_display_round_trips() {
        for variant in ListVariant::ALL {
            assert_eq!(variant.to_string().parse::<ListVariant>(), Ok(variant));
        }
    }

    #[test]
    fn test_new_list_variant() {
        for variant in ListVariant::ALL {
            let list = new_list(variant);
            assert_eq!(list.variant(), variant);
            assert!(list.is_empty());
        }
    }

    #[test]
    fn test_create_defaults_to_ten_random_values() {
        for variant in ListVariant::ALL {
            let mut list = new_list(variant);
            let mut source = ValueSource::seeded(3);
            assert!(list.create(None, Fill::Random, &mut source));
            assert_eq!(list.len(), DEFAULT_LENGTH);
            assert!(list.to_values().iter().all(|v| (1..=100).contains(v)));
        }
    }

    #[test]
    fn test_create_pads_with_generated_values() {
        let mut list = new_list(ListVariant::Single);
        let mut source = ValueSource::new(500, 500, None);
        list.create(Some(4), Fill::Values(vec![1, 2]), &mut source);
        assert_eq!(list.to_values(), vec![1, 2, 500, 500]);
    }

    #[test]
    fn test_create_truncates_extra_values() {
        let mut list = new_list(ListVariant::Circular);
        let mut source = ValueSource::seeded(0);
        list.create(Some(2), Fill::Values(vec![1, 2, 3]), &mut source);
        assert_eq!(list.to_values(), vec![1, 2]);
    }

    #[test]
    fn test_create_is_noop_on_populated_list() {
        let mut list = filled(ListVariant::Dual, &[4, 5]);
        let mut source = ValueSource::seeded(0);
        assert!(!list.create(Some(3), Fill::Random, &mut source));
        assert_eq!(list.to_values(), vec![4, 5]);
    }

    #[test]
    fn test_create_zero_length() {
        let mut list = new_list(ListVariant::Circular);
        let mut source = ValueSource::seeded(0);
        assert!(list.create(Some(0), Fill::Random, &mut source));
        assert!(list.is_empty());
        assert_eq!(list.next(list.head()), Some(list.head()));
    }

    #[test]
    fn test_insert_after_scenario() {
        for variant in ListVariant::ALL {
            let mut list = filled(variant, &[3, 7, 2]);
            let mut source = ValueSource::seeded(0);
            let insertion = list.insert_after(Some(1), Some(9), &mut source);
            assert_eq!(insertion.position(), 2);
            assert!(insertion.after().is_accepted());
            assert_eq!(list.to_values(), vec![3, 9, 7, 2], "{variant}");
            assert_eq!(list.len(), 4);
        }
    }

    #[test]
    fn test_insert_front_and_back() {
        for variant in ListVariant::ALL {
            let mut list = filled(variant, &[1, 2]);
            let mut source = ValueSource::seeded(0);
            list.insert_after(Some(0), Some(0), &mut source);
            list.insert_after(Some(3), Some(3), &mut source);
            assert_eq!(list.to_values(), vec![0, 1, 2, 3], "{variant}");
        }
    }

    #[test]
    fn test_insert_out_of_range_appends() {
        for variant in ListVariant::ALL {
            let mut list = filled(variant, &[1, 2]);
            let mut source = ValueSource::seeded(0);
            let insertion = list.insert_after(Some(17), Some(8), &mut source);
            assert!(!insertion.after().is_accepted());
            assert_eq!(insertion.position(), 3);
            list.insert_after(Some(-4), Some(9), &mut source);
            list.insert_after(None, Some(10), &mut source);
            assert_eq!(list.to_values(), vec![1, 2, 8, 9, 10], "{variant}");
        }
    }

    #[test]
    fn test_insert_missing_value_is_generated() {
        let mut list = new_list(ListVariant::Dual);
        let mut source = ValueSource::new(77, 77, None);
        let insertion = list.insert_after(Some(0), None, &mut source);
        assert_eq!(*insertion.value().value(), 77);
        assert!(!insertion.value().is_accepted());
        assert_eq!(list.to_values(), vec![77]);
    }

    #[test]
    fn test_delete_scenario() {
        for variant in ListVariant::ALL {
            let mut list = filled(variant, &[10, 20, 30]);
            assert_eq!(list.delete_at(2), Some(20));
            assert_eq!(list.to_values(), vec![10, 30], "{variant}");
            assert_eq!(list.len(), 2);
            assert!(list.find_all(20).is_empty());
        }
    }

    #[test]
    fn test_delete_ends() {
        for variant in ListVariant::ALL {
            let mut list = filled(variant, &[1, 2, 3]);
            assert_eq!(list.delete_at(3), Some(3));
            assert_eq!(list.delete_at(1), Some(1));
            assert_eq!(list.to_values(), vec![2], "{variant}");
            list.push_back(4);
            assert_eq!(list.to_values(), vec![2, 4], "{variant}");
        }
    }

    #[test]
    fn test_delete_invalid_is_noop() {
        for variant in ListVariant::ALL {
            let mut empty = new_list(variant);
            assert_eq!(empty.delete_at(1), None);

            let mut list = filled(variant, &[1, 2]);
            assert_eq!(list.delete_at(0), None);
            assert_eq!(list.delete_at(3), None);
            assert_eq!(list.delete_at(-1), None);
            assert_eq!(list.to_values(), vec![1, 2]);
        }
    }

    #[test]
    fn test_value_access() {
        for variant in ListVariant::ALL {
            let mut list = filled(variant, &[5, 6, 7]);
            assert_eq!(list.value_at(2), Some(6));
            assert_eq!(list.value_at(4), None);
            assert_eq!(list.set_value_at(3, 70), Some(7));
            assert_eq!(list.set_value_at(0, 1), None);
            assert_eq!(list.to_values(), vec![5, 6, 70], "{variant}");
        }
    }

    #[test]
    fn test_find_all_scenario() {
        let list = filled(ListVariant::Circular, &[5, 5, 5]);
        assert_eq!(list.find_all(5), vec![1, 2, 3]);
        assert!(list.find_all(6).is_empty());
    }

    #[test]
    fn test_clear() {
        for variant in ListVariant::ALL {
            let mut list = filled(variant, &[1, 2, 3]);
            list.clear();
            assert!(list.is_empty());
            assert!(list.to_values().is_empty());
            let head = list.head();
            match variant {
                ListVariant::Circular => assert_eq!(list.next(head), Some(head)),
                _ => assert_eq!(list.next(head), None),
            }
        }
    }
}
