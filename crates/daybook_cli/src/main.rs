//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `daybook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use daybook_core::{local_today, month_grid, EntryStore, MemoryKv, MonthCursor};

fn main() {
    println!("daybook_core version={}", daybook_core::core_version());

    let today = local_today();
    let grid = month_grid(MonthCursor::containing(today), today, Some(today));
    println!("grid cells={}", grid.len());

    let store = EntryStore::open(MemoryKv::new());
    println!(
        "store entries={} schedules={}",
        store.document().entries.len(),
        store.document().schedules.len()
    );
}
