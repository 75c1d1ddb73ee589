//! Cursor over a fixed, non-empty sequence of items.
//!
//! Every widget in the tutorial is a [`Pager`] plus some widget-specific
//! bookkeeping. Navigation is edge-clamped: requests outside the sequence are
//! ignored and reported as `false`, never as an error.

use serde::Serialize;
use std::fmt;

use crate::error::{TutorialError, TutorialResult};

/// Direction of the most recent cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// One-based position indicator ("2 of 4").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub index: usize,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.index, self.total)
    }
}

/// A cursor into an ordered, immutable list of items.
///
/// Invariant: `cursor < items.len()` and `items` is never empty.
#[derive(Debug, Clone)]
pub struct Pager<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T> Pager<T> {
    /// Create a pager positioned on the first item.
    ///
    /// `name` identifies the widget in the error raised for an empty list.
    pub fn new(name: &'static str, items: Vec<T>) -> TutorialResult<Self> {
        if items.is_empty() {
            return Err(TutorialError::EmptyContent(name));
        }
        Ok(Self { items, cursor: 0 })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The item under the cursor.
    pub fn current(&self) -> &T {
        &self.items[self.cursor]
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Move the cursor to `index` if it is in range.
    ///
    /// Returns true when the cursor changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.items.len() || index == self.cursor {
            return false;
        }
        self.cursor = index;
        true
    }

    /// Advance one item. No-op on the last item.
    pub fn next(&mut self) -> bool {
        match self.cursor.checked_add(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    /// Step back one item. No-op on the first item.
    pub fn previous(&mut self) -> bool {
        match self.cursor.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    /// Return to the first item.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Replace the items and return to the first one.
    pub fn replace(&mut self, name: &'static str, items: Vec<T>) -> TutorialResult<()> {
        if items.is_empty() {
            return Err(TutorialError::EmptyContent(name));
        }
        self.items = items;
        self.cursor = 0;
        Ok(())
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.items.len()
    }

    pub fn position(&self) -> Position {
        Position {
            index: self.cursor + 1,
            total: self.items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(n: usize) -> Pager<usize> {
        Pager::new("test", (0..n).collect()).unwrap()
    }

    #[test]
    fn test_empty_is_setup_error() {
        let result = Pager::<u8>::new("services", Vec::new());
        assert_eq!(result.unwrap_err(), TutorialError::EmptyContent("services"));
    }

    #[test]
    fn test_next_stops_at_last() {
        for n in 1..6 {
            for start in 0..n {
                let mut p = pager(n);
                p.go_to(start);
                for _ in 0..(n - 1 - start) {
                    assert!(p.next());
                }
                assert_eq!(p.cursor(), n - 1);
                assert!(!p.next());
                assert_eq!(p.cursor(), n - 1);
            }
        }
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut p = pager(4);
        p.go_to(2);
        assert!(!p.go_to(4));
        assert!(!p.go_to(usize::MAX));
        assert_eq!(p.cursor(), 2);
    }

    #[test]
    fn test_previous_at_first_is_noop() {
        let mut p = pager(4);
        assert!(!p.previous());
        assert_eq!(p.cursor(), 0);
        assert!(p.is_first());
    }

    #[test]
    fn test_position_display() {
        let mut p = pager(4);
        p.next();
        assert_eq!(p.position().to_string(), "2 of 4");
        assert_eq!(p.len(), 4);
        assert!(!p.is_empty());
        p.go_to(3);
        assert!(p.is_last());
    }

    #[test]
    fn test_replace_resets_cursor() {
        let mut p = pager(3);
        p.go_to(2);
        p.replace("test", vec![9, 8]).unwrap();
        assert_eq!(p.cursor(), 0);
        assert_eq!(*p.current(), 9);
        assert!(p.replace("test", Vec::new()).is_err());
    }
}
