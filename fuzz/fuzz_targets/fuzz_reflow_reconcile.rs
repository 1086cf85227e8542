#![no_main]

use libfuzzer_sys::fuzz_target;
use sortboard_core::Axis;
use sortboard_reflow::testing::{fake_column, listening_keys};
use sortboard_reflow::{ReconcileOptions, ReflowAnimator};

fuzz_target!(|data: &[u8]| {
    // Each byte picks a subset-and-rotation of a 6-key pool; odd high bits
    // interleave transition completions with new orders.
    let pool: Vec<u8> = (0..6).collect();
    let mut surface = fake_column(&pool, Axis::Block, 40.0);
    let mut animator = ReflowAnimator::default();

    for &byte in data.iter().take(256) {
        let mask = byte & 0x3f;
        let mut order: Vec<u8> = pool.iter().copied().filter(|k| mask & (1 << k) != 0).collect();
        if !order.is_empty() {
            let shift = usize::from(byte >> 6) % order.len();
            order.rotate_left(shift);
        }
        animator.reconcile(&order, &mut surface, ReconcileOptions::default());

        if byte & 0x80 != 0 {
            for key in listening_keys(&surface) {
                animator.on_transition_end(&key, &mut surface);
            }
        }
        assert_eq!(animator.pending(), listening_keys(&surface).len());
    }

    let mut rounds = 0;
    while !animator.is_settled() {
        rounds += 1;
        assert!(rounds < 4, "queued reconciliation never settled");
        let keys = listening_keys(&surface);
        assert!(!keys.is_empty(), "reconciling with no listeners");
        for key in keys {
            animator.on_transition_end(&key, &mut surface);
        }
    }
    assert_eq!(animator.rendered(), animator.latest());
});
