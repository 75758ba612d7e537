//! Model constructors
//!
//! This module provides the two strategies for building value models compatible with
//! the preference history: Fast Rejection Sampling ([`frs::Frs`]) and Evolutionary
//! Rejection Sampling ([`ers::Ers`]). Both return a [`bundle::CandidateBundle`] of the
//! same shape, so callers can use them interchangeably.

pub mod bundle;
pub mod ers;
pub mod frs;
pub mod queue;
pub mod selection;
pub mod traits;

pub mod prelude {
    pub use super::bundle::CandidateBundle;
    pub use super::ers::{Ers, ErsBuilder, ErsConfig};
    pub use super::frs::{Frs, FrsBuilder, FrsConfig};
    pub use super::queue::{ModelsQueue, SortedModel};
    pub use super::selection::TournamentSelection;
    pub use super::traits::{validate_snapshot, ModelConstructor};
}
