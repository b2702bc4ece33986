//! Compare: a bounded, ordered selection of properties to view side by side.
//!
//! The selection lives for the session only. When it is full, further
//! additions are rejected and reported back so the caller can tell the user.

mod store;

pub use store::{CompareEvent, CompareStore, CompareToggle, DEFAULT_COMPARE_LIMIT};
