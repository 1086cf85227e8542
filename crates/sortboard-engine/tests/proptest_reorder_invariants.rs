//! Property tests for the reorder engine.

use proptest::prelude::*;
use sortboard_core::DropSide;
use sortboard_engine::{MoveRequest, apply_move, landing_index, move_within, reorder};

fn side_strategy() -> impl Strategy<Value = DropSide> {
    prop_oneof![Just(DropSide::Before), Just(DropSide::After)]
}

/// A list of distinct items plus two valid indices into it.
fn list_and_indices() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    (1usize..24)
        .prop_flat_map(|len| (Just(len), 0..len, 0..len))
        .prop_map(|(len, a, b)| ((0..len as u32).collect(), a, b))
}

fn sorted(mut items: Vec<u32>) -> Vec<u32> {
    items.sort_unstable();
    items
}

proptest! {
    #[test]
    fn move_onto_self_before_is_noop((items, i, _) in list_and_indices()) {
        let lists = vec![items.clone()];
        let next = reorder(&lists, &MoveRequest::within(0, i, i, DropSide::Before)).unwrap();
        prop_assert_eq!(&next[0], &items);
    }

    #[test]
    fn same_list_move_is_permutation(
        (items, from, to) in list_and_indices(),
        side in side_strategy(),
    ) {
        let next = move_within(&items, from, to, side).unwrap();
        prop_assert_eq!(next.len(), items.len());
        prop_assert_eq!(sorted(next.clone()), sorted(items.clone()));
        prop_assert_eq!(next[landing_index(from, to, side, items.len())], items[from]);
    }

    #[test]
    fn backward_round_trip_with_complementary_side((items, a, b) in list_and_indices()) {
        prop_assume!(b < a);
        let moved = move_within(&items, a, b, DropSide::Before).unwrap();
        let p = landing_index(a, b, DropSide::Before, items.len());
        prop_assert_eq!(p, b);
        let back = move_within(&moved, p, a, DropSide::Before.complement()).unwrap();
        prop_assert_eq!(back, items);
    }

    #[test]
    fn round_trip_targeting_original_index(
        (items, a, b) in list_and_indices(),
        side in side_strategy(),
    ) {
        let moved = move_within(&items, a, b, side).unwrap();
        let p = landing_index(a, b, side, items.len());
        if p == a {
            // Dropped next to its own slot: nothing moved, nothing to undo.
            prop_assert_eq!(moved, items);
        } else {
            let back_side = if a < p { DropSide::Before } else { DropSide::After };
            let back = move_within(&moved, p, a, back_side).unwrap();
            prop_assert_eq!(back, items);
        }
    }

    #[test]
    fn cross_list_move_preserves_identity(
        source_len in 1usize..16,
        target_len in 0usize..16,
        from_seed in any::<usize>(),
        to_seed in any::<usize>(),
        side in side_strategy(),
    ) {
        let source: Vec<u32> = (0..source_len as u32).collect();
        let target: Vec<u32> = (100..100 + target_len as u32).collect();
        let from = from_seed % source_len;
        let (to, side) = if target_len == 0 {
            (0, DropSide::Before)
        } else {
            (to_seed % target_len, side)
        };
        let mut lists = vec![source.clone(), target.clone()];
        let req = MoveRequest {
            source_list: 0,
            source_index: from,
            target_list: 1,
            target_index: to,
            side,
        };
        let landed = apply_move(&mut lists, &req).unwrap();

        prop_assert_eq!(lists[0].len(), source_len - 1);
        prop_assert_eq!(lists[1].len(), target_len + 1);
        prop_assert!(!lists[0].contains(&source[from]));
        prop_assert_eq!(lists[1][landed], source[from]);

        let mut all: Vec<u32> = lists.concat();
        all.sort_unstable();
        let mut expected: Vec<u32> = [source, target].concat();
        expected.sort_unstable();
        prop_assert_eq!(all, expected);
    }

    #[test]
    fn invalid_requests_never_mutate(
        len in 0usize..8,
        from in 0usize..12,
        to in 0usize..12,
        side in side_strategy(),
    ) {
        let original: Vec<u32> = (0..len as u32).collect();
        let mut lists = vec![original.clone()];
        if apply_move(&mut lists, &MoveRequest::within(0, from, to, side)).is_err() {
            prop_assert_eq!(&lists[0], &original);
        }
    }
}
