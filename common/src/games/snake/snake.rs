use std::collections::{HashSet, VecDeque};

use super::types::Position;

/// Body segments head-first, mirrored in `body_set` for O(1) occupancy checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
    body_set: HashSet<Position>,
}

impl Snake {
    pub fn new(start_pos: Position) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        body.push_back(start_pos);
        body_set.insert(start_pos);
        Self { body, body_set }
    }

    /// Builds a snake from explicit segments. Duplicate segments are dropped.
    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Option<Self> {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        for segment in segments {
            if body_set.insert(segment) {
                body.push_back(segment);
            }
        }
        if body.is_empty() {
            return None;
        }
        Some(Self { body, body_set })
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Position {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, p: &Position) -> bool {
        self.body_set.contains(p)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    pub(crate) fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Position> {
        if self.body.len() <= 1 {
            return None;
        }
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }
}
