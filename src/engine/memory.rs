//! Short-term reply memory.
//!
//! Replies produced by high-rank rules are queued here and replayed, oldest
//! first, on later turns where no keyword rule matches. The queue grows only on
//! qualifying keyword matches and shrinks only on keyword-miss turns; entries
//! are never reordered.

use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub(crate) struct Memory {
    queue: VecDeque<String>,
}

impl Memory {
    pub fn remember(&mut self, reply: String) {
        self.queue.push_back(reply);
    }

    pub fn recall(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
