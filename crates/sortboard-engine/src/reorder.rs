#![forbid(unsafe_code)]

//! Reorder engine: index arithmetic for moving one item within or between
//! lists.
//!
//! # Same-list moves
//!
//! Removing the source item shifts every later index down by one, so the
//! insertion index is adjusted before the side offset is applied:
//!
//! ```text
//! insertion = if to > from { to - 1 } else { to }
//! position  = insertion + side.offset()      // Before = 0, After = 1
//! ```
//!
//! Dropping an item before itself (`to == from`, `Before`) leaves the list
//! unchanged; after itself moves it one slot forward. A landing position past
//! the end of the shortened list clamps to the last slot.
//!
//! # Cross-list moves
//!
//! Source and target are disjoint, so the item lands at `to + side.offset()`
//! with no adjustment. An empty target list is addressed as index 0,
//! [`DropSide::Before`].
//!
//! # Invariants
//!
//! 1. Every request is validated before any list is touched; a failed
//!    [`apply_move`] leaves all lists exactly as they were.
//! 2. The output is a permutation of the input: the multiset of items is
//!    preserved across all lists.

use sortboard_core::DropSide;

use crate::error::ReorderError;

/// One drag-driven move, addressed by list and item indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub source_list: usize,
    pub source_index: usize,
    pub target_list: usize,
    pub target_index: usize,
    pub side: DropSide,
}

impl MoveRequest {
    /// A move inside a single list.
    #[must_use]
    pub const fn within(list: usize, from: usize, to: usize, side: DropSide) -> Self {
        Self {
            source_list: list,
            source_index: from,
            target_list: list,
            target_index: to,
            side,
        }
    }

    /// Whether source and target are the same list.
    #[inline]
    #[must_use]
    pub const fn is_same_list(&self) -> bool {
        self.source_list == self.target_list
    }
}

/// Insert `item` at `to` (before) or `to + 1` (after). Positions past the end
/// append. Returns the index the item landed at.
pub fn insert_at<T>(items: &mut Vec<T>, item: T, to: usize, side: DropSide) -> usize {
    let position = to.saturating_add(side.offset()).min(items.len());
    items.insert(position, item);
    position
}

/// Final index of an item moved from `from` to `to` within a list of `len`
/// items.
///
/// Assumes both indices are in bounds.
#[must_use]
pub const fn landing_index(from: usize, to: usize, side: DropSide, len: usize) -> usize {
    let insertion = if to > from { to - 1 } else { to };
    let position = insertion + side.offset();
    let last = len.saturating_sub(1);
    if position > last { last } else { position }
}

/// Check that `request` addresses existing lists and items.
pub fn validate<T>(lists: &[Vec<T>], request: &MoveRequest) -> Result<(), ReorderError> {
    let lists_len = lists.len();
    for list in [request.source_list, request.target_list] {
        if list >= lists_len {
            return Err(ReorderError::ListOutOfBounds {
                list,
                lists: lists_len,
            });
        }
    }

    let source_len = lists[request.source_list].len();
    if request.source_index >= source_len {
        return Err(ReorderError::SourceOutOfBounds {
            list: request.source_list,
            index: request.source_index,
            len: source_len,
        });
    }

    let target_len = lists[request.target_list].len();
    let target_ok = if request.is_same_list() {
        request.target_index < target_len
    } else {
        request.target_index + request.side.offset() <= target_len
    };
    if !target_ok {
        return Err(ReorderError::TargetOutOfBounds {
            list: request.target_list,
            index: request.target_index,
            side: request.side,
            len: target_len,
        });
    }
    Ok(())
}

/// Apply `request` in place, returning the item's index in the target list.
pub fn apply_move<T>(lists: &mut [Vec<T>], request: &MoveRequest) -> Result<usize, ReorderError> {
    validate(lists, request)?;

    let MoveRequest {
        source_list,
        source_index,
        target_list,
        target_index,
        side,
    } = *request;

    if request.is_same_list() {
        let items = &mut lists[source_list];
        let landed = landing_index(source_index, target_index, side, items.len());
        if landed != source_index {
            let item = items.remove(source_index);
            items.insert(landed, item);
        }
        return Ok(landed);
    }

    let item = lists[source_list].remove(source_index);
    Ok(insert_at(&mut lists[target_list], item, target_index, side))
}

/// Compute the new board ordering for `request` without mutating the input.
pub fn reorder<T: Clone>(
    lists: &[Vec<T>],
    request: &MoveRequest,
) -> Result<Vec<Vec<T>>, ReorderError> {
    let mut next = lists.to_vec();
    apply_move(&mut next, request)?;
    Ok(next)
}

/// Compute the new ordering of a single list.
pub fn move_within<T: Clone>(
    items: &[T],
    from: usize,
    to: usize,
    side: DropSide,
) -> Result<Vec<T>, ReorderError> {
    let mut lists = [items.to_vec()];
    apply_move(&mut lists, &MoveRequest::within(0, from, to, side))?;
    let [next] = lists;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<&'static str> {
        vec!["John", "Bob", "Alice"]
    }

    #[test]
    fn forward_before_onto_next_is_noop() {
        let next = move_within(&names(), 0, 1, DropSide::Before).unwrap();
        assert_eq!(next, vec!["John", "Bob", "Alice"]);
    }

    #[test]
    fn backward_before() {
        let next = move_within(&names(), 2, 1, DropSide::Before).unwrap();
        assert_eq!(next, vec!["John", "Alice", "Bob"]);
    }

    #[test]
    fn backward_before_to_start() {
        let next = move_within(&names(), 2, 0, DropSide::Before).unwrap();
        assert_eq!(next, vec!["Alice", "John", "Bob"]);
    }

    #[test]
    fn forward_after() {
        let next = move_within(&names(), 0, 1, DropSide::After).unwrap();
        assert_eq!(next, vec!["Bob", "John", "Alice"]);
    }

    #[test]
    fn backward_after_onto_previous_is_noop() {
        let next = move_within(&names(), 2, 1, DropSide::After).unwrap();
        assert_eq!(next, vec!["John", "Bob", "Alice"]);
    }

    #[test]
    fn forward_after_to_end() {
        let next = move_within(&names(), 0, 2, DropSide::After).unwrap();
        assert_eq!(next, vec!["Bob", "Alice", "John"]);
    }

    #[test]
    fn onto_self_before_is_noop() {
        for i in 0..3 {
            assert_eq!(move_within(&names(), i, i, DropSide::Before).unwrap(), names());
        }
    }

    #[test]
    fn onto_self_after_moves_one_forward() {
        let next = move_within(&names(), 1, 1, DropSide::After).unwrap();
        assert_eq!(next, vec!["John", "Alice", "Bob"]);
        let next = move_within(&names(), 0, 0, DropSide::After).unwrap();
        assert_eq!(next, vec!["Bob", "John", "Alice"]);
    }

    #[test]
    fn after_itself_at_end_stays_last() {
        let mut lists = vec![names()];
        assert_eq!(
            apply_move(&mut lists, &MoveRequest::within(0, 2, 2, DropSide::After)),
            Ok(2)
        );
        assert_eq!(lists[0], names());
    }

    #[test]
    fn cross_list_move() {
        let lists = vec![vec!["a", "b", "c"], vec!["x", "y"]];
        let req = MoveRequest {
            source_list: 0,
            source_index: 1,
            target_list: 1,
            target_index: 0,
            side: DropSide::After,
        };
        let next = reorder(&lists, &req).unwrap();
        assert_eq!(next, vec![vec!["a", "c"], vec!["x", "b", "y"]]);
        // Input untouched.
        assert_eq!(lists[0], vec!["a", "b", "c"]);
    }

    #[test]
    fn cross_list_into_empty_list() {
        let mut lists = vec![vec!["a"], vec![]];
        let req = MoveRequest {
            source_list: 0,
            source_index: 0,
            target_list: 1,
            target_index: 0,
            side: DropSide::Before,
        };
        assert_eq!(apply_move(&mut lists, &req), Ok(0));
        assert_eq!(lists, vec![vec![], vec!["a"]]);
    }

    #[test]
    fn cross_list_after_last() {
        let mut lists = vec![vec!["a"], vec!["x", "y"]];
        let req = MoveRequest {
            source_list: 0,
            source_index: 0,
            target_list: 1,
            target_index: 1,
            side: DropSide::After,
        };
        assert_eq!(apply_move(&mut lists, &req), Ok(2));
        assert_eq!(lists[1], vec!["x", "y", "a"]);
    }

    #[test]
    fn after_on_empty_target_is_rejected() {
        let mut lists: Vec<Vec<&str>> = vec![vec!["a"], vec![]];
        let req = MoveRequest {
            source_list: 0,
            source_index: 0,
            target_list: 1,
            target_index: 0,
            side: DropSide::After,
        };
        assert_eq!(
            apply_move(&mut lists, &req),
            Err(ReorderError::TargetOutOfBounds {
                list: 1,
                index: 0,
                side: DropSide::After,
                len: 0
            })
        );
        assert_eq!(lists, vec![vec!["a"], vec![]]);
    }

    #[test]
    fn out_of_bounds_source_is_rejected_without_mutation() {
        let mut lists = vec![names()];
        let err = apply_move(&mut lists, &MoveRequest::within(0, 3, 0, DropSide::Before));
        assert_eq!(
            err,
            Err(ReorderError::SourceOutOfBounds {
                list: 0,
                index: 3,
                len: 3
            })
        );
        assert_eq!(lists[0], names());
    }

    #[test]
    fn same_list_target_must_be_an_existing_item() {
        let err = move_within(&names(), 0, 3, DropSide::Before);
        assert!(matches!(err, Err(ReorderError::TargetOutOfBounds { .. })));
    }

    #[test]
    fn unknown_list_is_rejected() {
        let lists = vec![names()];
        let req = MoveRequest {
            source_list: 0,
            source_index: 0,
            target_list: 4,
            target_index: 0,
            side: DropSide::Before,
        };
        assert_eq!(
            reorder(&lists, &req),
            Err(ReorderError::ListOutOfBounds { list: 4, lists: 1 })
        );
    }

    #[test]
    fn insert_at_clamps_past_end() {
        let mut items = vec![1, 2];
        assert_eq!(insert_at(&mut items, 9, 5, DropSide::After), 2);
        assert_eq!(items, vec![1, 2, 9]);
    }

    #[test]
    fn landing_index_matches_apply() {
        for from in 0..4 {
            for to in 0..4 {
                for side in [DropSide::Before, DropSide::After] {
                    let items = vec![0, 1, 2, 3];
                    let next = move_within(&items, from, to, side).unwrap();
                    assert_eq!(next[landing_index(from, to, side, 4)], from);
                }
            }
        }
    }
}
