//! Allocation behaviour of a pruning pass.
//!
//! Lives in its own test binary so the counting allocator sees no other tests.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use fieldquill::document::TreeValue;
use fieldquill::fields::{CaseSensitivity, Fields};
use fieldquill::prune::prune;
use serde_json::json;

struct CountingAllocator;

static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

/// Counts allocations made while pruning `count` identical elements.
fn allocations_for(fields: &Fields, count: usize) -> usize {
    let items: Vec<_> = (0..count)
        .map(|i| json!({"id": i, "name": "n", "meta": {"a": 1, "b": 2}}))
        .collect();
    let value = TreeValue::from(json!({"items": items, "total": count}));

    let before = ALLOCATIONS.load(Ordering::Relaxed);
    let pruned = prune(value, fields, CaseSensitivity::Sensitive, None);
    let after = ALLOCATIONS.load(Ordering::Relaxed);
    drop(pruned);
    after - before
}

#[test]
fn test_revisited_paths_do_not_allocate() {
    let fields = Fields::parse("items(id,meta/a)").unwrap();

    let small = allocations_for(&fields, 2);
    let large = allocations_for(&fields, 500);
    assert_eq!(small, large);
}
