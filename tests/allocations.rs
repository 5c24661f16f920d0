//! Checks that an evaluation releases everything it allocates.
//!
//! A counting global allocator tracks live heap blocks per thread, so the
//! test harness allocating on other threads does not disturb the count.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

use calcup::{
    config::{Config, DecimalSeparator},
    evaluate_with,
};

struct CountingAllocator;

thread_local! {
    static LIVE_BLOCKS: Cell<isize> = const { Cell::new(0) };
}

fn adjust(delta: isize) {
    let _ = LIVE_BLOCKS.try_with(|live| live.set(live.get() + delta));
}

fn live_blocks() -> isize {
    LIVE_BLOCKS.with(Cell::get)
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            adjust(1);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        adjust(-1);
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

const INPUTS: &[&str] = &[// Successful evaluations.
                          "2+3",
                          "(2+3)*4",
                          "2^3^2",
                          "-log(2.5 * (1 + 2)) / 0",
                          "((((1))))",
                          // Lexing failures.
                          "1 + x",
                          "1.2.3",
                          "logx",
                          // Parsing failures, at every tier.
                          "",
                          "2+",
                          "(2+3",
                          "2 3",
                          "2/*3",
                          "--2",
                          "log log 2",
                          "2^",
                          "(1 + (2 * (3 - ))",
                          // Inputs past the nesting limit.
                          "((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\
                           ((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\
                           (1",
                          "1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^\
                           1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^\
                           1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^\
                           1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^1^\
                           1^1"];

#[test]
fn evaluation_leaves_no_live_allocations() {
    let configs = [Config::default(),
                   Config::default().with_separator(DecimalSeparator::Comma)];

    for config in &configs {
        for input in INPUTS {
            let before = live_blocks();
            let result = evaluate_with(input, config);
            drop(result);
            assert_eq!(live_blocks(), before, "{input:?} leaked with {config:?}");
        }

        let long_sum = format!("{}1", "1+".repeat(10_000));
        let before = live_blocks();
        let result = evaluate_with(&long_sum, config);
        drop(result);
        assert_eq!(live_blocks(), before, "long sum leaked with {config:?}");
    }
}
