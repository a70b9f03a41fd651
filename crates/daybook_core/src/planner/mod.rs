//! Free-slot planning over schedule items.
//!
//! # Responsibility
//! - Find gaps inside working hours not covered by planned events.

pub mod free_slots;

pub use free_slots::{weekly_free_slots, FreeSlot};
