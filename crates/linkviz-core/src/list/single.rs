use log::trace;

use super::{
    Insertion, LinkedSequence, ListVariant, NodeId, ValueSource,
    arena::{Arena, HEAD},
};
use crate::check;

/// Singly linked list with a head sentinel.
///
/// The last element's `next` link is empty.
#[derive(Debug, Clone)]
pub struct SingleList {
    arena: Arena,
    tail: NodeId,
    len: usize,
}

impl SingleList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            tail: HEAD,
            len: 0,
        }
    }

    /// Returns the node at 1-based `position`, or the head for position 0.
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

impl Default for SingleList {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedSequence for SingleList {
    fn variant(&self) -> ListVariant {
        ListVariant::Single
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
        trace!(after:% = after, value:% = value; "Inserted into single list");
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

    fn to_values(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.len);
        let mut current = self.arena.next(HEAD);
        while let Some(node) = current {
            values.push(self.arena.value(node));
            current = self.arena.next(node);
        }
        values
    }

    fn clear(&mut self) {
        self.arena.reset();
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

    #[test]
    fn test_push_back_links_in_order() {
        let mut list = SingleList::new();
        list.push_back(1);
        list.push_back(2);
        let first = list.next(list.head()).unwrap();
        let second = list.next(first).unwrap();
        assert_eq!(list.next(second), None);
        assert_eq!(list.previous(second), None);
        assert_eq!(list.to_values(), vec![1, 2]);
    }

    #[test]
    fn test_tail_follows_deletions() {
        let mut list = SingleList::new();
        for v in [1, 2, 3] {
            list.push_back(v);
        }
        list.delete_at(3);
        list.delete_at(2);
        list.push_back(9);
        assert_eq!(list.to_values(), vec![1, 9]);
    }

    #[test]
    fn test_clear_releases_nodes() {
        let mut list = SingleList::new();
        for v in 0..5 {
            list.push_back(v);
        }
        list.clear();
        assert_eq!(list.arena.live(), 1);
        assert_eq!(list.next(list.head()), None);
    }
}
