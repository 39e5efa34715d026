//! Per-aspect password checks
//!
//! Each check inspects one aspect of the password and feeds one or more
//! fields of the [`Criteria`](crate::Criteria) breakdown.

mod length;
mod pattern;
mod variety;

pub use length::meets_minimum_length;
pub use pattern::{has_repeated_run, has_sequential_run};
pub use variety::ClassPresence;
