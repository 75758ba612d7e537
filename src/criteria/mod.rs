//! Criterion space
//!
//! Every alternative and every value model in one decision-making context share the
//! same ordered list of criteria.

pub mod normalization;

use serde::{Deserialize, Serialize};

pub use normalization::Normalization;

/// Preference direction of a single criterion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Smaller values are better (cost type)
    #[default]
    Minimize,
    /// Larger values are better (gain type)
    Maximize,
}

/// A named criterion
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criterion {
    /// Display name
    pub name: String,
    /// Whether the criterion is minimized or maximized
    pub direction: Direction,
}

impl Criterion {
    /// Create a new criterion
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }

    /// Create a cost-type criterion
    pub fn cost(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Minimize)
    }

    /// Create a gain-type criterion
    pub fn gain(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Maximize)
    }
}

/// Ordered list of criteria
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    criteria: Vec<Criterion>,
}

impl Criteria {
    /// Create a criterion space from a list of criteria
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    /// Create `count` cost-type criteria named `f0`, `f1`, ...
    pub fn costs(count: usize) -> Self {
        (0..count).map(|i| Criterion::cost(format!("f{i}"))).collect()
    }

    /// Number of criteria
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Check whether the space has no criteria
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Get a criterion by index
    pub fn get(&self, index: usize) -> Option<&Criterion> {
        self.criteria.get(index)
    }

    /// Iterate over the criteria in order
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    /// Normalizations for values already scaled to [0, 1]
    pub fn identity_normalizations(&self) -> Vec<Normalization> {
        self.criteria
            .iter()
            .map(|c| Normalization::identity(c.direction))
            .collect()
    }

    /// Normalizations from per-criterion observed `(min, max)` ranges
    ///
    /// Ranges beyond the number of criteria are ignored.
    pub fn normalizations_from_ranges(&self, ranges: &[(f64, f64)]) -> Vec<Normalization> {
        self.criteria
            .iter()
            .zip(ranges)
            .map(|(c, &(min, max))| Normalization::from_range(c.direction, min, max))
            .collect()
    }
}

impl FromIterator<Criterion> for Criteria {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self {
            criteria: iter.into_iter().collect(),
        }
    }
}

pub mod prelude {
    pub use super::normalization::Normalization;
    pub use super::{Criteria, Criterion, Direction};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs() {
        let criteria = Criteria::costs(3);
        assert_eq!(criteria.len(), 3);
        assert_eq!(criteria.get(1).map(|c| c.name.as_str()), Some("f1"));
        assert!(criteria.iter().all(|c| c.direction == Direction::Minimize));
    }

    #[test]
    fn test_default_direction_is_minimize() {
        assert_eq!(Direction::default(), Direction::Minimize);
    }

    #[test]
    fn test_identity_normalizations_follow_direction() {
        let criteria = Criteria::new(vec![Criterion::cost("price"), Criterion::gain("comfort")]);
        let norms = criteria.identity_normalizations();
        assert_eq!(norms[0].apply(0.25), 0.25);
        assert_eq!(norms[1].apply(0.25), 0.75);
    }

    #[test]
    fn test_normalizations_from_ranges() {
        let criteria = Criteria::new(vec![Criterion::cost("price"), Criterion::gain("comfort")]);
        let norms = criteria.normalizations_from_ranges(&[(100.0, 200.0), (1.0, 5.0)]);
        assert_eq!(norms.len(), 2);
        assert_eq!(norms[0].apply(150.0), 0.5);
        assert_eq!(norms[1].apply(5.0), 0.0);
    }
}
