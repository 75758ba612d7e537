//! Preference information
//!
//! This module provides alternatives, pairwise preference statements and the
//! timestamped history they are recorded in.

pub mod alternative;
pub mod history;
pub mod statement;

pub mod prelude {
    pub use super::alternative::{Alternative, AlternativeId};
    pub use super::history::{History, HistoryEntry};
    pub use super::statement::{PreferenceStatement, Relation};
}
