//! Proves the leak-freedom guarantee: every allocation made before a
//! failing point is released before the error crosses the `parse` boundary,
//! transitively through arbitrarily deep nesting.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    sync::atomic::{AtomicIsize, Ordering},
};

struct CountingAlloc;

static LIVE_BLOCKS: AtomicIsize = AtomicIsize::new(0);

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        LIVE_BLOCKS.fetch_add(1, Ordering::SeqCst);
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        LIVE_BLOCKS.fetch_sub(1, Ordering::SeqCst);
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static ALLOC: CountingAlloc = CountingAlloc;

fn live_blocks() -> isize {
    LIVE_BLOCKS.load(Ordering::SeqCst)
}

// Single test function: the harness runs tests concurrently, and a second
// test in this binary would race the block counter.
#[test]
fn parse_never_leaks() {
    // Error paths: siblings and ancestors of the failing element were
    // already heap-allocated when the error fired.
    let malformed = [
        r#"[[["a","b",{"k":["c","d",nul]}]]]"#,
        r#"{"a":[1,2],"b":{"c":"long enough to allocate","d":[[[["#,
        r#"["ok","also ok","\uD800x"]"#,
        r#"[{"k":"v"},{"k":"v"},{"k":"v"}"#,
        "[1,2,3,4,5,6,7,8,9,1e309]",
        r#"{"deep":{"deep":{"deep":{"deep":"unterminated"#,
    ];
    for doc in malformed {
        let before = live_blocks();
        assert!(jsontree::parse(doc).is_err());
        assert_eq!(live_blocks(), before, "leaked parsing {doc:?}");
    }

    // Success then drop balances too.
    let before = live_blocks();
    let v = jsontree::parse(r#"{"a":[1,[2,[3,"four"]]],"b":"five"}"#).unwrap();
    drop(v);
    assert_eq!(live_blocks(), before);

    // RootNotSingular drops the fully-built root tree.
    let before = live_blocks();
    assert!(jsontree::parse(r#"[1,[2,[3,"four"]]] trailing"#).is_err());
    assert_eq!(live_blocks(), before);
}
