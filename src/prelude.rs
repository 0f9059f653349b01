//! Prelude module for the ethiopian_calendar crate.
//!
//! Re-exports the derive_more macros used by the date and error types.

pub use derive_more::{Deref, Display, From, Into};
