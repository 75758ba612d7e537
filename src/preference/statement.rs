//! Pairwise preference statements

use std::fmt;

use serde::{Deserialize, Serialize};

use super::alternative::Alternative;
use crate::error::ModelError;

/// Relation expressed by the decision maker between two alternatives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// The first alternative is strictly preferred to the second
    Preference,
    /// Both alternatives are equally good
    Indifference,
    /// The decision maker cannot compare the two alternatives
    Incomparable,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Preference => ">",
            Self::Indifference => "~",
            Self::Incomparable => "?",
        };
        f.write_str(symbol)
    }
}

/// An immutable pairwise judgment
///
/// The relation and both alternatives are fixed at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreferenceStatement {
    relation: Relation,
    first: Alternative,
    second: Alternative,
}

impl PreferenceStatement {
    /// Create a statement with an explicit relation
    pub fn new(relation: Relation, first: Alternative, second: Alternative) -> Self {
        Self {
            relation,
            first,
            second,
        }
    }

    /// `preferred` is strictly better than `other`
    pub fn preference(preferred: Alternative, other: Alternative) -> Self {
        Self::new(Relation::Preference, preferred, other)
    }

    /// Both alternatives are equally good
    pub fn indifference(first: Alternative, second: Alternative) -> Self {
        Self::new(Relation::Indifference, first, second)
    }

    /// The alternatives cannot be compared
    pub fn incomparable(first: Alternative, second: Alternative) -> Self {
        Self::new(Relation::Incomparable, first, second)
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn first(&self) -> &Alternative {
        &self.first
    }

    pub fn second(&self) -> &Alternative {
        &self.second
    }

    /// Check both alternatives are described on `expected` criteria
    pub fn check_dimension(&self, expected: usize) -> Result<(), ModelError> {
        for alternative in [&self.first, &self.second] {
            if alternative.dimension() != expected {
                return Err(ModelError::DimensionMismatch {
                    expected,
                    actual: alternative.dimension(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for PreferenceStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.first.id(),
            self.relation,
            self.second.id()
        )
    }
}
