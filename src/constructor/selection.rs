//! Parent selection over a fitness-sorted queue

use rand::Rng;

/// Tournament selection on ranks
///
/// Because the queue is sorted by descending fitness, the winner of a tournament is
/// simply the smallest index drawn.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Number of uniform draws per tournament
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        assert!(tournament_size >= 1, "Tournament size must be at least 1");
        Self { tournament_size }
    }

    /// Create binary tournament selection (size = 2)
    pub fn binary() -> Self {
        Self::new(2)
    }

    /// Run one tournament over a queue of `len` entries
    pub fn select<R: Rng>(&self, len: usize, rng: &mut R) -> usize {
        assert!(len > 0, "Population cannot be empty");

        let mut winner = rng.gen_range(0..len);
        for _ in 1..self.tournament_size {
            winner = winner.min(rng.gen_range(0..len));
        }
        winner
    }

    /// Run two independent tournaments and return the winners, lower index first
    ///
    /// Both parents may be the same entry.
    pub fn select_parents<R: Rng>(&self, len: usize, rng: &mut R) -> (usize, usize) {
        let first = self.select(len, rng);
        let second = self.select(len, rng);
        if second < first {
            (second, first)
        } else {
            (first, second)
        }
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::binary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_select_valid_index() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let selection = TournamentSelection::new(3);
        for _ in 0..100 {
            assert!(selection.select(10, &mut rng) < 10);
        }
    }

    #[test]
    fn test_large_tournament_prefers_top() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(2);
        let selection = TournamentSelection::new(50);
        let mut top = 0;
        for _ in 0..100 {
            if selection.select(5, &mut rng) == 0 {
                top += 1;
            }
        }
        assert!(top > 95);
    }

    #[test]
    fn test_parents_ordered() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let selection = TournamentSelection::binary();
        for _ in 0..200 {
            let (a, b) = selection.select_parents(8, &mut rng);
            assert!(a <= b);
            assert!(b < 8);
        }
    }

    #[test]
    fn test_size_one_is_uniform() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(4);
        let selection = TournamentSelection::new(1);
        let mut counts = [0usize; 4];
        let trials = 8000;
        for _ in 0..trials {
            counts[selection.select(4, &mut rng)] += 1;
        }
        for count in counts {
            let share = count as f64 / trials as f64;
            assert!((share - 0.25).abs() < 0.03, "share {share}");
        }
    }

    #[test]
    fn test_single_entry() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        assert_eq!(TournamentSelection::binary().select_parents(1, &mut rng), (0, 0));
    }

    #[test]
    #[should_panic(expected = "Tournament size must be at least 1")]
    fn test_tournament_size_zero() {
        TournamentSelection::new(0);
    }

    #[test]
    #[should_panic(expected = "Population cannot be empty")]
    fn test_empty_population() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(6);
        TournamentSelection::binary().select(0, &mut rng);
    }
}
