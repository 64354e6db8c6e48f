use log::trace;

use super::{
    Insertion, LinkedSequence, ListVariant, NodeId, ValueSource,
    arena::{Arena, HEAD},
};
use crate::check;

/// Singly linked ring closed through its head sentinel.
///
/// The head is part of the forward ring: the last element links to the head,
/// and an empty list's head links to itself.
#[derive(Debug, Clone)]
pub struct CircularList {
    arena: Arena,
    tail: NodeId,
    len: usize,
}

impl CircularList {
    /// Creates an empty ring
    pub fn new() -> Self {
        let mut arena = Arena::new();
        arena.set_next(HEAD, Some(HEAD));
        Self {
            arena,
            tail: HEAD,
            len: 0,
        }
    }

    fn node_at(&self, position: usize) -> Option<NodeId> {
        self.arena.walk(HEAD, position)
    }

    fn link_after(&mut self, anchor: NodeId, value: i64) {
        let node = self.arena.alloc(value);
        self.arena.set_next(node, self.arena.next(anchor));
        self.arena.set_next(anchor, Some(node));
        if anchor == self.tail {
            self.tail = node;
        }
        self.len += 1;
    }
}

impl Default for CircularList {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedSequence for CircularList {
    fn variant(&self) -> ListVariant {
        ListVariant::Circular
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push_back(&mut self, value: i64) {
        self.link_after(self.tail, value);
    }

    fn insert_after(
        &mut self,
        index: Option<i64>,
        value: Option<i64>,
        source: &mut ValueSource,
    ) -> Insertion {
        let after = check::insert_index(index, self.len);
        let value = check::value_or_generate(value, || source.next_value());
        let anchor = self.node_at(*after.value()).unwrap_or(self.tail);
        self.link_after(anchor, *value.value());
        trace!(after:% = after, value:% = value; "Inserted into circular list");
        Insertion::new(after, value)
    }

    fn delete_at(&mut self, index: i64) -> Option<i64> {
        let position = check::element_index(index, self.len)?;
        let before = self.node_at(position - 1)?;
        let target = self.arena.next(before)?;
        self.arena.set_next(before, self.arena.next(target));
        if target == self.tail {
            self.tail = before;
        }
        self.len -= 1;
        Some(self.arena.release(target))
    }

    fn value_at(&self, index: i64) -> Option<i64> {
        let position = check::element_index(index, self.len)?;
        self.node_at(position).map(|node| self.arena.value(node))
    }

    fn set_value_at(&mut self, index: i64, value: i64) -> Option<i64> {
        let position = check::element_index(index, self.len)?;
        let node = self.node_at(position)?;
        Some(self.arena.replace_value(node, value))
    }

    /// Walks exactly `len` links so the ring never loops.
    fn to_values(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.len);
        let mut current = HEAD;
        for _ in 0..self.len {
            match self.arena.next(current) {
                Some(node) if node != HEAD => {
                    values.push(self.arena.value(node));
                    current = node;
                }
                _ => break,
            }
        }
        values
    }

    fn clear(&mut self) {
        self.arena.reset();
        self.arena.set_next(HEAD, Some(HEAD));
        self.tail = HEAD;
        self.len = 0;
    }

    fn head(&self) -> NodeId {
        HEAD
    }

    fn next(&self, node: NodeId) -> Option<NodeId> {
        self.arena.next(node)
    }

    fn previous(&self, _node: NodeId) -> Option<NodeId> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_of(values: &[i64]) -> CircularList {
        let mut list = CircularList::new();
        for v in values {
            list.push_back(*v);
        }
        list
    }

    #[test]
    fn test_empty_head_links_to_itself() {
        let list = CircularList::new();
        assert_eq!(list.next(list.head()), Some(list.head()));
        assert!(list.to_values().is_empty());
    }

    #[test]
    fn test_ring_closes_after_len_steps() {
        let list = ring_of(&[4, 5, 6]);
        let end = list.arena.walk(list.head(), list.len());
        assert_eq!(end.and_then(|node| list.next(node)), Some(list.head()));
        assert_eq!(list.arena.walk(list.head(), 4), Some(list.head()));
    }

    #[test]
    fn test_delete_only_element_recloses_head() {
        let mut list = ring_of(&[1]);
        assert_eq!(list.delete_at(1), Some(1));
        assert_eq!(list.next(list.head()), Some(list.head()));
        list.push_back(2);
        assert_eq!(list.to_values(), vec![2]);
    }

    #[test]
    fn test_clear_leaves_no_ring() {
        let mut list = ring_of(&[1, 2, 3]);
        list.clear();
        assert_eq!(list.arena.live(), 1);
        assert_eq!(list.next(list.head()), Some(list.head()));
    }
}
