#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sortboard_core::DropSide;
use sortboard_engine::{MoveRequest, apply_move};

#[derive(Debug, Arbitrary)]
struct Move {
    source_list: u8,
    source_index: u8,
    target_list: u8,
    target_index: u8,
    after: bool,
}

#[derive(Debug, Arbitrary)]
struct Input {
    list_lens: Vec<u8>,
    moves: Vec<Move>,
}

fuzz_target!(|input: Input| {
    // Up to 6 lists of up to 31 items, numbered uniquely across the board.
    let mut next = 0u32;
    let mut lists: Vec<Vec<u32>> = input
        .list_lens
        .iter()
        .take(6)
        .map(|len| {
            (0..u32::from(len % 32))
                .map(|_| {
                    next += 1;
                    next
                })
                .collect()
        })
        .collect();
    let mut expected: Vec<u32> = lists.concat();
    expected.sort_unstable();

    for m in input.moves.iter().take(64) {
        let request = MoveRequest {
            source_list: usize::from(m.source_list),
            source_index: usize::from(m.source_index),
            target_list: usize::from(m.target_list),
            target_index: usize::from(m.target_index),
            side: if m.after { DropSide::After } else { DropSide::Before },
        };
        let before = lists.clone();
        match apply_move(&mut lists, &request) {
            Ok(landed) => {
                let moved = before[request.source_list][request.source_index];
                assert_eq!(lists[request.target_list][landed], moved, "item not at landing index");
            }
            Err(_) => assert_eq!(lists, before, "failed move mutated lists"),
        }

        let mut all: Vec<u32> = lists.concat();
        all.sort_unstable();
        assert_eq!(all, expected, "move is not a permutation");
    }
});
