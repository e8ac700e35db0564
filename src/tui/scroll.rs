//! Generic windowed scrolling over a slice.
//!
//! Every scrollable panel (resume lines, work, education, skills,
//! projects) shares this logic. A panel owns a [`ScrollState`] (just the
//! offset) and builds a [`ScrollableList`] on demand from its items and
//! the current capacity. Capacity changes with the terminal size, so it
//! is never stored.
//!
//! Invariant: after any scroll operation the stored offset lies in
//! `[0, max_offset]` where `max_offset = max(0, len - capacity)`.

/// Per-panel scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
}

impl ScrollState {
    /// State positioned at `offset`. Clamped on first use.
    pub fn at(offset: usize) -> Self {
        ScrollState { offset }
    }

    /// Index of the first visible item.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Back to the first item.
    pub fn reset_to_top(&mut self) {
        self.offset = 0;
    }
}

/// A slice viewed through a window of fixed capacity.
#[derive(Debug, Clone, Copy)]
pub struct ScrollableList<'a, T> {
    items: &'a [T],
    capacity: usize,
}

/// What a panel needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a, T> {
    pub visible: &'a [T],
    pub offset: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_more: bool,
}

impl<'a, T> ScrollableList<'a, T> {
    /// Capacity below 1 is raised to 1.
    pub fn new(items: &'a [T], capacity: usize) -> Self {
        ScrollableList {
            items,
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest legal offset.
    pub fn max_offset(&self) -> usize {
        max_offset(self.items.len(), self.capacity)
    }

    /// Visible slice and edge flags for `state`.
    ///
    /// A stale offset (terminal grew since the last scroll) is clamped
    /// here without writing it back.
    pub fn window(&self, state: &ScrollState) -> Window<'a, T> {
        let total = self.items.len();
        let offset = state.offset.min(self.max_offset());
        let end = (offset + self.capacity).min(total);
        Window {
            visible: &self.items[offset..end],
            offset,
            total,
            has_previous: offset > 0,
            has_more: offset + self.capacity < total,
        }
    }

    pub fn scroll_up(&self, state: &mut ScrollState) {
        scroll_up(state, self.items.len(), self.capacity);
    }

    pub fn scroll_down(&self, state: &mut ScrollState) {
        scroll_down(state, self.items.len(), self.capacity);
    }
}

impl<T> Window<'_, T> {
    /// One-based `(first, last)` positions shown, `None` when empty.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.visible.is_empty() {
            None
        } else {
            Some((self.offset + 1, self.offset + self.visible.len()))
        }
    }
}

// ============================================================================
// LENGTH-ONLY OPERATIONS
// ============================================================================
//
// The input router only knows item counts, not the items themselves.

/// `max(0, len - capacity)` with capacity floored at 1.
pub fn max_offset(len: usize, capacity: usize) -> usize {
    len.saturating_sub(capacity.max(1))
}

/// Move one item up; no-op at the top.
pub fn scroll_up(state: &mut ScrollState, len: usize, capacity: usize) {
    let clamped = state.offset.min(max_offset(len, capacity));
    state.offset = clamped.saturating_sub(1);
}

/// Move one item down; no-op once the last item is visible.
pub fn scroll_down(state: &mut ScrollState, len: usize, capacity: usize) {
    let max = max_offset(len, capacity);
    let clamped = state.offset.min(max);
    state.offset = if clamped < max { clamped + 1 } else { clamped };
}

// ============================================================================
// TESTS
// ============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Offset stays within [0, max(0, n - c)] after any call sequence.
        #[test]
        fn prop_offset_stays_in_bounds(
            n in 0..200usize,
            c in 1..40usize,
            ops in prop::collection::vec(any::<bool>(), 0..200)
        ) {
            let mut state = ScrollState::default();
            for down in ops {
                if down {
                    scroll_down(&mut state, n, c);
                } else {
                    scroll_up(&mut state, n, c);
                }
                prop_assert!(state.offset() <= n.saturating_sub(c));
            }
        }

        /// Up undoes down (and vice versa) wherever both can move.
        #[test]
        fn prop_up_and_down_are_inverse(
            n in 1..200usize,
            c in 1..40usize,
            ops in prop::collection::vec(any::<bool>(), 0..50)
        ) {
            let mut state = ScrollState::default();
            for down in ops {
                if down {
                    scroll_down(&mut state, n, c);
                } else {
                    scroll_up(&mut state, n, c);
                }
            }
            let start = state.offset();

            if start > 0 {
                scroll_up(&mut state, n, c);
                scroll_down(&mut state, n, c);
                prop_assert_eq!(state.offset(), start);
            }
            if start < max_offset(n, c) {
                scroll_down(&mut state, n, c);
                scroll_up(&mut state, n, c);
                prop_assert_eq!(state.offset(), start);
            }
        }

        /// Window flags and slice follow from offset, capacity and length.
        #[test]
        fn prop_window_matches_definitions(
            n in 0..200usize,
            c in 1..40usize,
            ops in prop::collection::vec(any::<bool>(), 0..100)
        ) {
            let data: Vec<usize> = (0..n).collect();
            let list = ScrollableList::new(&data, c);
            let mut state = ScrollState::default();
            for down in ops {
                if down {
                    list.scroll_down(&mut state);
                } else {
                    list.scroll_up(&mut state);
                }
            }
            let o = state.offset();
            let w = list.window(&state);
            prop_assert_eq!(w.has_previous, o > 0);
            prop_assert_eq!(w.has_more, o + c < n);
            prop_assert_eq!(w.visible, &data[o..(o + c).min(n)]);
        }
    }
}
