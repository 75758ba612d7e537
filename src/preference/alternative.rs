//! Alternatives
//!
//! An alternative is an immutable identifier plus a performance vector over the
//! criteria of the decision-making context.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for an alternative
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AlternativeId(pub usize);

impl fmt::Display for AlternativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alternative({})", self.0)
    }
}

impl From<usize> for AlternativeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// An alternative described by its performance on each criterion
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    id: AlternativeId,
    performance: Vec<f64>,
}

impl Alternative {
    /// Create a new alternative
    pub fn new(id: impl Into<AlternativeId>, performance: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            performance,
        }
    }

    /// The identifier
    pub fn id(&self) -> AlternativeId {
        self.id
    }

    /// The performance vector
    pub fn performance(&self) -> &[f64] {
        &self.performance
    }

    /// Number of criteria this alternative is described on
    pub fn dimension(&self) -> usize {
        self.performance.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternative_accessors() {
        let a = Alternative::new(7, vec![0.4, 0.6]);
        assert_eq!(a.id(), AlternativeId(7));
        assert_eq!(a.performance(), &[0.4, 0.6]);
        assert_eq!(a.dimension(), 2);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(AlternativeId(3).to_string(), "Alternative(3)");
    }
}
