//! # fugue-pref
//!
//! Preference model construction for interactive multi-criteria decision making.
//!
//! A decision maker compares alternatives and the library keeps a set of value models
//! that agree with every recorded comparison. The models drive the search for the next
//! alternatives to show.
//!
//! ## Core Concepts
//!
//! - **Compatibility**: a model's margin against a statement set is its worst score over
//!   the statements; positive means the model reproduces all of them
//! - **Model constructors**: Fast Rejection Sampling ([`constructor::frs::Frs`]) and
//!   Evolutionary Rejection Sampling ([`constructor::ers::Ers`]) build compatible models
//!   and keep them between iterations
//! - **Representative model**: the candidate with the largest margin
//! - **Consistency repair**: contradictory histories are fixed by dropping the oldest
//!   statements
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fugue_pref::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut ctx = DecisionContext::new(Criteria::costs(2), rand::rngs::StdRng::seed_from_u64(42));
//! let mut history = History::new();
//! history.record(PreferenceStatement::preference(
//!     Alternative::new(0, vec![0.2, 0.6]),
//!     Alternative::new(1, vec![0.6, 0.2]),
//! ))?;
//!
//! let mut frs = FrsBuilder::new()
//!     .feasible_samples(100)
//!     .generator(RandomLNorm::chebyshev())
//!     .build()?;
//!
//! let mut bundle = frs.construct(&history.snapshot(), &mut ctx)?;
//! if bundle.inconsistent {
//!     let report = RemoveOldest::new().reintroduce_consistency(bundle, &mut frs, &mut history, &mut ctx)?;
//!     bundle = CandidateBundle::new(report.consistent_state.models, 0, report.stats);
//! }
//! let representative = select_representative(&bundle.models, &history.snapshot());
//! ```

pub mod compatibility;
pub mod consistency;
pub mod constructor;
pub mod context;
pub mod criteria;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod preference;
pub mod representative;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compatibility::prelude::*;
    pub use crate::consistency::prelude::*;
    pub use crate::constructor::prelude::*;
    pub use crate::context::DecisionContext;
    pub use crate::criteria::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::model::prelude::*;
    pub use crate::preference::prelude::*;
    pub use crate::representative::prelude::*;
}
