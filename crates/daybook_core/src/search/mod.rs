//! Keyword search entry points.
//!
//! # Responsibility
//! - Expose the case-folded substring query over both collections.
//! - Keep result shaping (ordering, cap) inside core.

pub mod keyword;

pub use keyword::{search_document, SearchOutcome, SearchResults, SEARCH_RESULT_CAP};
