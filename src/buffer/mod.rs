//! Arena-backed line sequence with stable cursor handles.
//!
//! The buffer is an ordered sequence of [`Line`]s that supports O(1)
//! insertion and removal at a cursor. Instead of raw pointer links, lines
//! live in a slot arena and are addressed by [`LineId`] handles; each slot
//! carries `prev`/`next` links forming a doubly linked list over the arena.
//! A free-list reuses vacated slots before the arena grows.
//!
//! # Design
//!
//! - Slot 0 is reserved/invalid, so a `LineId` is never zero
//! - Handles stay valid across unrelated inserts and removals
//! - `head`/`tail` give O(1) access to the sequence ends
//!
//! # Invariants
//!
//! - Link consistency: for every live slot `x`, `prev(next(x)) == x` and
//!   `next(prev(x)) == x` where the neighbor exists
//! - `head` is `None` iff the sequence is empty, same for `tail`
//! - A removed slot's id is recycled; callers must not retain ids past
//!   removal

mod line;

pub use line::Line;

use crate::error::Boundary;

/// Stable handle to a line in a [`LineBuffer`].
///
/// Ids are only meaningful for the buffer that produced them and become
/// invalid once the line is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineId(u32);

impl LineId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Internal slot in the line arena.
#[derive(Clone, Debug)]
struct Node {
    line: Line,
    prev: Option<LineId>,
    next: Option<LineId>,
}

/// Ordered, doubly traversable sequence of lines.
#[derive(Clone, Debug)]
pub struct LineBuffer {
    /// Slot storage. Index 0 is reserved (invalid); `None` marks a free slot.
    slots: Vec<Option<Node>>,
    /// Stack of free slot indices for reuse.
    free_list: Vec<u32>,
    head: Option<LineId>,
    tail: Option<LineId>,
    len: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            // Reserve slot 0 as invalid
            slots: vec![None],
            free_list: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of lines in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the buffer holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First line of the buffer, if any.
    #[must_use]
    pub fn head(&self) -> Option<LineId> {
        self.head
    }

    /// Last line of the buffer, if any.
    #[must_use]
    pub fn tail(&self) -> Option<LineId> {
        self.tail
    }

    /// Get a line's content. Returns `None` for removed or foreign ids.
    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.slots.get(id.index())?.as_ref().map(|node| &node.line)
    }

    /// Successor of `id`, if one exists.
    #[must_use]
    pub fn next(&self, id: LineId) -> Option<LineId> {
        self.slots.get(id.index())?.as_ref()?.next
    }

    /// Predecessor of `id`, if one exists.
    #[must_use]
    pub fn prev(&self, id: LineId) -> Option<LineId> {
        self.slots.get(id.index())?.as_ref()?.prev
    }

    /// Move a cursor one line forward.
    ///
    /// # Errors
    ///
    /// Returns [`Boundary::AtEnd`] when the cursor is `None` (empty buffer)
    /// or already on the last line. The cursor itself is untouched either
    /// way; callers decide whether to adopt the returned id.
    pub fn advance(&self, cursor: Option<LineId>) -> Result<LineId, Boundary> {
        cursor
            .and_then(|id| self.next(id))
            .ok_or(Boundary::AtEnd)
    }

    /// Move a cursor one line backward.
    ///
    /// # Errors
    ///
    /// Returns [`Boundary::AtStart`] when the cursor is `None` or already
    /// on the first line.
    pub fn retreat(&self, cursor: Option<LineId>) -> Result<LineId, Boundary> {
        cursor
            .and_then(|id| self.prev(id))
            .ok_or(Boundary::AtStart)
    }

    /// Insert `line` immediately after `at`, returning the new line's id.
    ///
    /// `at == None` inserts at the front; with an empty buffer the new line
    /// becomes both head and tail. Returning the inserted id lets serial
    /// inserts thread one after another.
    pub fn insert_after(&mut self, at: Option<LineId>, line: Line) -> LineId {
        let Some(at_id) = at else {
            return self.push_front(line);
        };

        let next = self.node(at_id).next;
        let id = self.alloc(Node {
            line,
            prev: Some(at_id),
            next,
        });
        match next {
            Some(next_id) => self.node_mut(next_id).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.node_mut(at_id).next = Some(id);
        self.len += 1;
        id
    }

    /// Remove the line `id`, relinking its neighbors.
    ///
    /// Returns the preferred next cursor: the successor when one exists,
    /// otherwise the predecessor, otherwise `None` (the buffer is now
    /// empty). The slot goes back on the free-list.
    pub fn remove(&mut self, id: LineId) -> Option<LineId> {
        let node = self.slots[id.index()]
            .take()
            .expect("remove of live line id");

        match node.prev {
            Some(prev_id) => self.node_mut(prev_id).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next_id) => self.node_mut(next_id).prev = node.prev,
            None => self.tail = node.prev,
        }

        self.free_list.push(id.0);
        self.len -= 1;
        node.next.or(node.prev)
    }

    /// Iterate over the lines from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buffer: self,
            cursor: self.head,
        }
    }

    fn push_front(&mut self, line: Line) -> LineId {
        let next = self.head;
        let id = self.alloc(Node {
            line,
            prev: None,
            next,
        });
        match next {
            Some(next_id) => self.node_mut(next_id).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    fn alloc(&mut self, node: Node) -> LineId {
        if let Some(index) = self.free_list.pop() {
            self.slots[index as usize] = Some(node);
            return LineId(index);
        }
        let index = u32::try_from(self.slots.len()).expect("line arena overflow");
        self.slots.push(Some(node));
        LineId(index)
    }

    fn node(&self, id: LineId) -> &Node {
        self.slots[id.index()].as_ref().expect("live line id")
    }

    fn node_mut(&mut self, id: LineId) -> &mut Node {
        self.slots[id.index()].as_mut().expect("live line id")
    }

    /// Verify link consistency; used by tests after mutation sequences.
    #[cfg(test)]
    fn check_links(&self) {
        let mut count = 0;
        let mut prev: Option<LineId> = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.node(id);
            assert_eq!(node.prev, prev, "prev link mismatch at {id:?}");
            prev = cursor;
            cursor = node.next;
            count += 1;
        }
        assert_eq!(self.tail, prev, "tail does not match last reachable node");
        assert_eq!(self.len, count, "len does not match reachable node count");
        assert_eq!(self.head.is_none(), self.len == 0);
    }
}

/// Head-to-tail iterator over buffer lines.
pub struct Iter<'a> {
    buffer: &'a LineBuffer,
    cursor: Option<LineId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Line;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.buffer.next(id);
        self.buffer.line(id)
    }
}

impl<'a> IntoIterator for &'a LineBuffer {
    type Item = &'a Line;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
