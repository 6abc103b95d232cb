//! The coin registry — four disjoint classification pools.
//!
//! Every coin of the puzzle lives in exactly one of four ordered pools,
//! keyed by its [`Marker`]: unmarked, lighter, heavier, standard. The pools
//! are mutually exclusive and collectively exhaustive, so the four sizes
//! always sum to the puzzle's coin count.
//!
//! Order within a pool is insertion order unless [`CoinRegistry::shuffle_all`]
//! is called. Shuffling is presentation-only: it reorders coins inside each
//! pool but never moves a coin between pools, and it must not affect which
//! coin the solver ultimately identifies.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::coin::{Coin, CoinId, Deviation, Marker};
use crate::error::SolverError;

/// Current sizes of the four classification pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolCounts {
    /// Coins no weighing has implicated yet.
    pub unmarked: usize,
    /// Candidate light counterfeits.
    pub lighter: usize,
    /// Candidate heavy counterfeits.
    pub heavier: usize,
    /// Coins proven genuine.
    pub standard: usize,
}

impl PoolCounts {
    /// Total number of coins across all four pools.
    pub fn total(&self) -> usize {
        self.unmarked + self.lighter + self.heavier + self.standard
    }

    /// Number of coins still viable as the counterfeit (lighter + heavier).
    pub fn viable(&self) -> usize {
        self.lighter + self.heavier
    }
}

/// Partition of all coins into the four classification pools.
#[derive(Clone, Debug)]
pub struct CoinRegistry {
    unmarked: Vec<Coin>,
    lighter: Vec<Coin>,
    heavier: Vec<Coin>,
    standard: Vec<Coin>,
}

impl CoinRegistry {
    /// Construct a registry of `num_coins` fresh coins, ids `1..=num_coins`,
    /// all unmarked.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidCoinCount`] if `num_coins == 0`.
    pub fn new(num_coins: u16) -> Result<Self, SolverError> {
        if num_coins == 0 {
            return Err(SolverError::InvalidCoinCount(num_coins));
        }
        Ok(Self {
            unmarked: (1..=num_coins).map(Coin::new).collect(),
            lighter: Vec::new(),
            heavier: Vec::new(),
            standard: Vec::new(),
        })
    }

    fn pool(&self, marker: Marker) -> &Vec<Coin> {
        match marker {
            Marker::Unmarked => &self.unmarked,
            Marker::Lighter => &self.lighter,
            Marker::Heavier => &self.heavier,
            Marker::Standard => &self.standard,
        }
    }

    fn pool_mut(&mut self, marker: Marker) -> &mut Vec<Coin> {
        match marker {
            Marker::Unmarked => &mut self.unmarked,
            Marker::Lighter => &mut self.lighter,
            Marker::Heavier => &mut self.heavier,
            Marker::Standard => &mut self.standard,
        }
    }

    /// Remove and return the first `count` coins of the `marker` pool.
    ///
    /// # Errors
    ///
    /// [`SolverError::InsufficientCoins`] if the pool holds fewer than
    /// `count` coins. The registry is left unchanged in that case.
    pub fn take_from(&mut self, marker: Marker, count: usize) -> Result<Vec<Coin>, SolverError> {
        let pool = self.pool_mut(marker);
        if pool.len() < count {
            return Err(SolverError::InsufficientCoins {
                marker,
                requested: count,
                available: pool.len(),
            });
        }
        Ok(pool.drain(..count).collect())
    }

    /// Current sizes of the four pools.
    pub fn counts(&self) -> PoolCounts {
        PoolCounts {
            unmarked: self.unmarked.len(),
            lighter: self.lighter.len(),
            heavier: self.heavier.len(),
            standard: self.standard.len(),
        }
    }

    /// Append each coin to the pool matching its current marker.
    pub fn redistribute(&mut self, coins: Vec<Coin>) {
        for coin in coins {
            self.pool_mut(coin.marker()).push(coin);
        }
    }

    /// Independently shuffle the order of coins inside each pool.
    ///
    /// Membership never changes; this only varies which coins a later
    /// `take_from` picks first.
    pub fn shuffle_all<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.unmarked.shuffle(rng);
        self.lighter.shuffle(rng);
        self.heavier.shuffle(rng);
        self.standard.shuffle(rng);
    }

    /// True once the puzzle is decided: no coin is unmarked and at most one
    /// candidate counterfeit remains.
    pub fn is_resolved(&self) -> bool {
        self.lighter.len() + self.heavier.len() <= 1 && self.unmarked.is_empty()
    }

    /// The single remaining candidate and its deviation, if exactly one coin
    /// sits in the lighter pool xor the heavier pool.
    pub fn sole_candidate(&self) -> Option<(CoinId, Deviation)> {
        match (self.lighter.as_slice(), self.heavier.as_slice()) {
            ([coin], []) => Some((coin.id(), Deviation::Lighter)),
            ([], [coin]) => Some((coin.id(), Deviation::Heavier)),
            _ => None,
        }
    }

    /// Ids of the coins currently in the `marker` pool, in pool order.
    pub fn ids_in(&self, marker: Marker) -> Vec<CoinId> {
        self.pool(marker).iter().map(Coin::id).collect()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_registry_all_unmarked() {
        let registry = CoinRegistry::new(12).unwrap();
        let counts = registry.counts();
        assert_eq!(counts.unmarked, 12);
        assert_eq!(counts.lighter, 0);
        assert_eq!(counts.heavier, 0);
        assert_eq!(counts.standard, 0);
        assert_eq!(registry.ids_in(Marker::Unmarked), (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_coins_rejected() {
        assert_eq!(
            CoinRegistry::new(0).unwrap_err(),
            SolverError::InvalidCoinCount(0)
        );
    }

    #[test]
    fn test_take_from_removes_in_order() {
        let mut registry = CoinRegistry::new(5).unwrap();
        let taken = registry.take_from(Marker::Unmarked, 2).unwrap();
        assert_eq!(taken.iter().map(Coin::id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(registry.counts().unmarked, 3);
        assert_eq!(registry.ids_in(Marker::Unmarked), vec![3, 4, 5]);
    }

    #[test]
    fn test_take_from_insufficient_is_error_and_nondestructive() {
        let mut registry = CoinRegistry::new(3).unwrap();
        let err = registry.take_from(Marker::Unmarked, 4).unwrap_err();
        assert_eq!(
            err,
            SolverError::InsufficientCoins {
                marker: Marker::Unmarked,
                requested: 4,
                available: 3,
            }
        );
        // Failed take must not consume anything
        assert_eq!(registry.counts().unmarked, 3);
    }

    #[test]
    fn test_take_from_empty_pool() {
        let mut registry = CoinRegistry::new(3).unwrap();
        assert!(registry.take_from(Marker::Standard, 1).is_err());
        assert!(registry.take_from(Marker::Standard, 0).unwrap().is_empty());
    }

    #[test]
    fn test_redistribute_routes_by_marker() {
        let mut registry = CoinRegistry::new(4).unwrap();
        let mut coins = registry.take_from(Marker::Unmarked, 4).unwrap();
        coins[0].mark_lighter();
        coins[1].mark_heavier();
        coins[2].mark_standard();
        // coins[3] stays unmarked
        registry.redistribute(coins);

        let counts = registry.counts();
        assert_eq!(counts.lighter, 1);
        assert_eq!(counts.heavier, 1);
        assert_eq!(counts.standard, 1);
        assert_eq!(counts.unmarked, 1);
        assert_eq!(registry.ids_in(Marker::Lighter), vec![1]);
        assert_eq!(registry.ids_in(Marker::Heavier), vec![2]);
    }

    #[test]
    fn test_conservation_across_operations() {
        let mut registry = CoinRegistry::new(9).unwrap();
        let mut coins = registry.take_from(Marker::Unmarked, 6).unwrap();
        for coin in coins.iter_mut().take(3) {
            coin.mark_heavier();
        }
        registry.redistribute(coins);
        assert_eq!(registry.counts().total(), 9);
    }

    #[test]
    fn test_shuffle_preserves_membership() {
        let mut registry = CoinRegistry::new(8).unwrap();
        let mut coins = registry.take_from(Marker::Unmarked, 4).unwrap();
        for coin in &mut coins {
            coin.mark_lighter();
        }
        registry.redistribute(coins);

        let mut rng = StdRng::seed_from_u64(42);
        let before = registry.counts();
        let mut lighter_ids = registry.ids_in(Marker::Lighter);
        registry.shuffle_all(&mut rng);
        assert_eq!(registry.counts(), before);

        let mut shuffled_ids = registry.ids_in(Marker::Lighter);
        lighter_ids.sort_unstable();
        shuffled_ids.sort_unstable();
        assert_eq!(lighter_ids, shuffled_ids);
    }

    #[test]
    fn test_is_resolved() {
        let mut registry = CoinRegistry::new(3).unwrap();
        assert!(!registry.is_resolved());

        let mut coins = registry.take_from(Marker::Unmarked, 3).unwrap();
        coins[0].mark_standard();
        coins[1].mark_standard();
        coins[2].mark_heavier();
        registry.redistribute(coins);
        assert!(registry.is_resolved());
        assert_eq!(registry.sole_candidate(), Some((3, Deviation::Heavier)));
    }

    #[test]
    fn test_resolved_with_zero_candidates_has_no_sole_candidate() {
        let mut registry = CoinRegistry::new(2).unwrap();
        let mut coins = registry.take_from(Marker::Unmarked, 2).unwrap();
        coins[0].mark_standard();
        coins[1].mark_standard();
        registry.redistribute(coins);
        assert!(registry.is_resolved());
        assert_eq!(registry.sole_candidate(), None);
    }

    #[test]
    fn test_two_candidates_not_resolved() {
        let mut registry = CoinRegistry::new(2).unwrap();
        let mut coins = registry.take_from(Marker::Unmarked, 2).unwrap();
        coins[0].mark_lighter();
        coins[1].mark_heavier();
        registry.redistribute(coins);
        assert!(!registry.is_resolved());
        assert_eq!(registry.sole_candidate(), None);
    }
}
