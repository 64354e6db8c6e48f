/// Handle to a node record stored in an [`Arena`].
///
/// Handles are only meaningful for the list that produced them and may be
/// reused after the node they named has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the slot number of this handle inside its arena
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Record {
    value: i64,
    next: Option<NodeId>,
    previous: Option<NodeId>,
}

impl Record {
    fn unlinked(value: i64) -> Self {
        Self {
            value,
            next: None,
            previous: None,
        }
    }
}

/// Node storage shared by all list variants.
///
/// Records live in one vector and refer to each other by [`NodeId`]. Slot 0
/// always holds the head sentinel; removed slots go on a free list and are
/// handed out again by [`Arena::alloc`].
#[derive(Debug, Clone)]
pub(crate) struct Arena {
    records: Vec<Record>,
    free: Vec<NodeId>,
}

/// The head sentinel's slot.
pub(crate) const HEAD: NodeId = NodeId(0);

impl Arena {
    pub(crate) fn new() -> Self {
        Self {
            records: vec![Record::unlinked(0)],
            free: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, value: i64) -> NodeId {
        let record = Record::unlinked(value);
        match self.free.pop() {
            Some(id) => {
                self.records[id.0] = record;
                id
            }
            None => {
                self.records.push(record);
                NodeId(self.records.len() - 1)
            }
        }
    }

    /// Unlinks the record and returns its slot to the free list.
    pub(crate) fn release(&mut self, id: NodeId) -> i64 {
        debug_assert_ne!(id, HEAD, "the head sentinel is never released");
        let record = &mut self.records[id.0];
        record.next = None;
        record.previous = None;
        self.free.push(id);
        record.value
    }

    /// Drops every record except the head, which is left unlinked.
    pub(crate) fn reset(&mut self) {
        self.records.truncate(1);
        self.records[HEAD.0] = Record::unlinked(0);
        self.free.clear();
    }

    pub(crate) fn value(&self, id: NodeId) -> i64 {
        self.records[id.0].value
    }

    pub(crate) fn replace_value(&mut self, id: NodeId, value: i64) -> i64 {
        std::mem::replace(&mut self.records[id.0].value, value)
    }

    pub(crate) fn next(&self, id: NodeId) -> Option<NodeId> {
        self.records[id.0].next
    }

    pub(crate) fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.records[id.0].next = next;
    }

    pub(crate) fn previous(&self, id: NodeId) -> Option<NodeId> {
        self.records[id.0].previous
    }

    pub(crate) fn set_previous(&mut self, id: NodeId, previous: Option<NodeId>) {
        self.records[id.0].previous = previous;
    }

    /// Follows `next` links `steps` times starting at `from`.
    ///
    /// Returns `None` if the chain ends first.
    pub(crate) fn walk(&self, from: NodeId, steps: usize) -> Option<NodeId> {
        let mut current = from;
        for _ in 0..steps {
            current = self.next(current)?;
        }
        Some(current)
    }

    /// Number of records in use, head included
    #[cfg(test)]
    pub(crate) fn live(&self) -> usize {
        self.records.len() - self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_arena_holds_only_head() {
        let arena = Arena::new();
        assert_eq!(arena.live(), 1);
        assert_eq!(arena.next(HEAD), None);
        assert_eq!(arena.previous(HEAD), None);
    }

    #[test]
    fn test_released_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.alloc(10);
        let b = arena.alloc(20);
        assert_eq!(arena.live(), 3);

        assert_eq!(arena.release(a), 10);
        assert_eq!(arena.live(), 2);

        let c = arena.alloc(30);
        assert_eq!(c, a);
        assert_eq!(arena.value(c), 30);
        assert_eq!(arena.value(b), 20);
    }

    #[test]
    fn test_walk() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        arena.set_next(HEAD, Some(a));
        arena.set_next(a, Some(b));

        assert_eq!(arena.walk(HEAD, 0), Some(HEAD));
        assert_eq!(arena.walk(HEAD, 2), Some(b));
        assert_eq!(arena.walk(HEAD, 3), None);
    }

    #[test]
    fn test_reset_unlinks_head() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        arena.set_next(HEAD, Some(a));
        arena.set_previous(HEAD, Some(a));
        arena.reset();

        assert_eq!(arena.live(), 1);
        assert_eq!(arena.next(HEAD), None);
        assert_eq!(arena.previous(HEAD), None);
    }

    #[test]
    fn test_replace_value() {
        let mut arena = Arena::new();
        let a = arena.alloc(5);
        assert_eq!(arena.replace_value(a, 8), 5);
        assert_eq!(arena.value(a), 8);
    }
}
