//! Undo/redo snapshots

use std::collections::VecDeque;
use ziffi_core::{GameState, Move, Square};

/// Full controller state at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: GameState,
    pub selected: Option<Square>,
    pub valid_moves: Vec<Move>,
}

/// A LIFO stack that drops its oldest entry once `limit` is exceeded.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: VecDeque<T>,
    limit: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
        while self.items.len() > self.limit {
            self.items.pop_front();
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
