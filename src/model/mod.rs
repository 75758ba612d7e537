//! Value models
//!
//! This module provides the value model abstraction, two concrete model families,
//! random generators for them and an offspring operator.

pub mod linear;
pub mod lnorm;
pub mod offspring;
pub mod traits;
pub mod weights;

pub mod prelude {
    pub use super::linear::{LinearUtility, RandomLinearUtility};
    pub use super::lnorm::{LNorm, RandomLNorm};
    pub use super::offspring::WeightsCrossover;
    pub use super::traits::*;
}
