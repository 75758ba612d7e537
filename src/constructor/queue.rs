//! Bounded fitness-sorted model population
//!
//! Entries live in a plain vector kept sorted by descending fitness; index 0 is the
//! fittest model and an entry's `rank` is its index. The queue never holds more than
//! `capacity` entries: inserting into a full queue evicts the least fit entry.

use std::ops::Index;

use crate::model::traits::ValueModel;

/// A model with its cached fitness and current rank
#[derive(Clone, Debug, PartialEq)]
pub struct SortedModel<M> {
    pub model: M,
    pub fitness: f64,
    pub rank: usize,
}

/// Bounded queue of models sorted by descending fitness
#[derive(Clone, Debug)]
pub struct ModelsQueue<M> {
    entries: Vec<SortedModel<M>>,
    capacity: usize,
}

impl<M: ValueModel> ModelsQueue<M> {
    /// Create an empty queue
    ///
    /// # Panics
    /// Panics if `capacity` is zero
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "Queue capacity must be at least 1");
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Get an entry by rank
    pub fn get(&self, rank: usize) -> Option<&SortedModel<M>> {
        self.entries.get(rank)
    }

    /// The fittest entry
    pub fn fittest(&self) -> Option<&SortedModel<M>> {
        self.entries.first()
    }

    /// Iterate from fittest to least fit
    pub fn iter(&self) -> impl Iterator<Item = &SortedModel<M>> {
        self.entries.iter()
    }

    /// Copy of the models in rank order
    pub fn models(&self) -> Vec<M> {
        self.entries.iter().map(|e| e.model.clone()).collect()
    }

    /// Insert a model and return the evicted entry, if any
    ///
    /// Entries with equal fitness keep their insertion order, so a newcomer that ties
    /// with the least fit entry of a full queue is the one evicted.
    pub fn insert(&mut self, model: M, fitness: f64) -> Option<SortedModel<M>> {
        self.entries.push(SortedModel {
            model,
            fitness,
            rank: self.entries.len(),
        });
        self.resort();

        if self.entries.len() > self.capacity {
            return self.entries.pop();
        }
        None
    }

    /// Re-evaluate every entry, dropping those for which `score` returns `None`
    ///
    /// `score` may modify the model (e.g. to refresh its normalizations). Returns the
    /// number of dropped entries.
    pub fn rescore<F>(&mut self, mut score: F) -> usize
    where
        F: FnMut(&mut M) -> Option<f64>,
    {
        let before = self.entries.len();
        self.entries.retain_mut(|entry| match score(&mut entry.model) {
            Some(fitness) => {
                entry.fitness = fitness;
                true
            }
            None => false,
        });
        self.resort();
        before - self.entries.len()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn resort(&mut self) {
        self.entries.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for (rank, entry) in self.entries.iter_mut().enumerate() {
            entry.rank = rank;
        }
    }
}

impl<M> Index<usize> for ModelsQueue<M> {
    type Output = SortedModel<M>;

    fn index(&self, rank: usize) -> &Self::Output {
        &self.entries[rank]
    }
}
