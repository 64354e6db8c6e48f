use log::trace;

use super::{
    Insertion, LinkedSequence, ListVariant, NodeId, ValueSource,
    arena::{Arena, HEAD},
};
use crate::check;

/// Doubly linked list with a head sentinel.
///
/// Every element links back to its predecessor; the first element's
/// predecessor is the head.
#[derive(Debug, Clone)]
pub struct DualList {
    arena: Arena,
    tail: NodeId,
    len: usize,
}

impl DualList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            tail: HEAD,
            len: 0,
        }
    }

    /// Returns the node at 1-based `position`, walking from whichever end is closer.
    fn node_at(&self, position: usize) -> Option<NodeId> {
        if position > self.len / 2 {
            let mut current = self.tail;
            for _ in position..self.len {
                current = self.arena.previous(current)?;
            }
            Some(current)
        } else {
            self.arena.walk(HEAD, position)
        }
    }

    fn link_after(&mut self, anchor: NodeId, value: i64) {
        let node = self.arena.alloc(value);
        let successor = self.arena.next(anchor);
        self.arena.set_next(node, successor);
        self.arena.set_previous(node, Some(anchor));
        match successor {
            Some(successor) => self.arena.set_previous(successor, Some(node)),
            None => self.tail = node,
        }
        self.arena.set_next(anchor, Some(node));
        self.len += 1;
    }
}

impl Default for DualList {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedSequence for DualList {
    fn variant(&self) -> ListVariant {
        ListVariant::Dual
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
        trace!(after:% = after, value:% = value; "Inserted into dual list");
        Insertion::new(after, value)
    }

    fn delete_at(&mut self, index: i64) -> Option<i64> {
        let position = check::element_index(index, self.len)?;
        let target = self.node_at(position)?;
        let before = self.arena.previous(target)?;
        let after = self.arena.next(target);
        self.arena.set_next(before, after);
        match after {
            Some(after) => self.arena.set_previous(after, Some(before)),
            None => self.tail = before,
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

    fn previous(&self, node: NodeId) -> Option<NodeId> {
        self.arena.previous(node)
    }
}
