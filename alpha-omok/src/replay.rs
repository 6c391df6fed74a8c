use std::collections::VecDeque;

use crate::example::Example;

/// Most recent training examples, oldest first.
#[derive(Clone, Debug)]
pub struct ReplayBuffer {
    capacity: usize,
    examples: VecDeque<Example>,
}

impl ReplayBuffer {
    pub fn new(capacity: usize) -> Self {
        ReplayBuffer {
            capacity,
            examples: VecDeque::with_capacity(capacity.min(1 << 16)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn push(&mut self, example: Example) {
        if self.capacity == 0 {
            return;
        }
        if self.examples.len() == self.capacity {
            self.examples.pop_front();
        }
        self.examples.push_back(example);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Example> + '_ {
        self.examples.iter()
    }

    /// Contiguous view of the buffer, oldest first.
    pub fn as_slice(&mut self) -> &[Example] {
        self.examples.make_contiguous()
    }
}

impl Extend<Example> for ReplayBuffer {
    fn extend<T: IntoIterator<Item = Example>>(&mut self, iter: T) {
        iter.into_iter().for_each(|example| self.push(example));
    }
}
