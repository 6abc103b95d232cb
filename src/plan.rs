//! The weighing plan — pan assignment, outcome application, weighings budget.
//!
//! A [`WeighingPlan`] holds one round's pan assignment: the coins on the
//! `left` and `right` pans and the coins set `aside`, plus the number of
//! weighings still available. Pans are always the same size — a balance is
//! symmetric, an uneven weighing carries no information.
//!
//! After the balance is read, [`WeighingPlan::apply_outcome`] converts the
//! three-valued [`Outcome`] into per-coin reclassification and drains the
//! plan, returning the coins for redistribution:
//!
//! - an unbalanced read marks the heavy pan's coins heavier, the light pan's
//!   coins lighter, and proves every aside coin genuine (the counterfeit was
//!   on a pan);
//! - a balanced read proves both pans genuine and says nothing about the
//!   aside coins, which come back unchanged.
//!
//! The weighings budget follows the ternary information bound: `w` weighings
//! distinguish at most `(3^w − 1) / 2` coins, so a puzzle of `N` coins gets
//! the minimal `w` satisfying that bound (three weighings for the classic
//! twelve-coin puzzle).

use crate::coin::{Coin, Deviation};
use crate::error::SolverError;

/// The three possible reads of a two-pan balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The left pan sank.
    LeftHeavier,
    /// The pans levelled out.
    Balanced,
    /// The right pan sank.
    RightHeavier,
}

/// Maximum number of coins `weighings` rounds can definitively resolve:
/// `(3^w − 1) / 2`.
pub fn capacity(weighings: u32) -> u64 {
    (3u64.pow(weighings) - 1) / 2
}

/// Minimal number of weighings whose [`capacity`] covers `num_coins`.
pub fn required_weighings(num_coins: u16) -> u32 {
    let mut weighings = 1;
    while capacity(weighings) < u64::from(num_coins) {
        weighings += 1;
    }
    weighings
}

/// One round's pan assignment plus the remaining weighings budget.
///
/// Rebuilt each round by [`PartitionStrategy`] and consumed by
/// [`WeighingPlan::apply_outcome`].
///
/// [`PartitionStrategy`]: crate::strategy::PartitionStrategy
#[derive(Clone, Debug, Default)]
pub struct WeighingPlan {
    left: Vec<Coin>,
    right: Vec<Coin>,
    aside: Vec<Coin>,
    weighings_remaining: u32,
}

impl WeighingPlan {
    /// Construct an empty plan with the budget [`required_weighings`] gives
    /// for `num_coins`.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidCoinCount`] if `num_coins == 0`.
    pub fn new(num_coins: u16) -> Result<Self, SolverError> {
        if num_coins == 0 {
            return Err(SolverError::InvalidCoinCount(num_coins));
        }
        Ok(Self {
            left: Vec::new(),
            right: Vec::new(),
            aside: Vec::new(),
            weighings_remaining: required_weighings(num_coins),
        })
    }

    /// Coins on the left pan.
    pub fn left(&self) -> &[Coin] {
        &self.left
    }

    /// Coins on the right pan.
    pub fn right(&self) -> &[Coin] {
        &self.right
    }

    /// Coins excluded from this weighing.
    pub fn aside(&self) -> &[Coin] {
        &self.aside
    }

    /// Number of weighings still available.
    pub fn weighings_remaining(&self) -> u32 {
        self.weighings_remaining
    }

    /// True when no coin is assigned to either pan or set aside.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty() && self.aside.is_empty()
    }

    pub(crate) fn extend_left(&mut self, coins: Vec<Coin>) {
        self.left.extend(coins);
    }

    pub(crate) fn extend_right(&mut self, coins: Vec<Coin>) {
        self.right.extend(coins);
    }

    pub(crate) fn extend_aside(&mut self, coins: Vec<Coin>) {
        self.aside.extend(coins);
    }

    /// Reclassify every coin on the plan according to `outcome`, drain the
    /// plan, and return the coins for redistribution.
    ///
    /// Coins come back in left, right, aside order. When the counterfeit's
    /// deviation is known a priori, pass it as `known`: the matching marking
    /// is force-applied to every returned coin, which collapses the
    /// two-direction ambiguity immediately (a coin contradicting the known
    /// direction resolves to standard, a fresh candidate takes the known
    /// direction at once).
    ///
    /// Decrements the weighings budget by one.
    pub fn apply_outcome(&mut self, outcome: Outcome, known: Option<Deviation>) -> Vec<Coin> {
        let mut marked = Vec::with_capacity(self.left.len() + self.right.len() + self.aside.len());
        match outcome {
            Outcome::LeftHeavier => {
                for mut coin in self.left.drain(..) {
                    coin.mark_heavier();
                    marked.push(coin);
                }
                for mut coin in self.right.drain(..) {
                    coin.mark_lighter();
                    marked.push(coin);
                }
                for mut coin in self.aside.drain(..) {
                    coin.mark_standard();
                    marked.push(coin);
                }
            }
            Outcome::RightHeavier => {
                for mut coin in self.left.drain(..) {
                    coin.mark_lighter();
                    marked.push(coin);
                }
                for mut coin in self.right.drain(..) {
                    coin.mark_heavier();
                    marked.push(coin);
                }
                for mut coin in self.aside.drain(..) {
                    coin.mark_standard();
                    marked.push(coin);
                }
            }
            Outcome::Balanced => {
                for mut coin in self.left.drain(..) {
                    coin.mark_standard();
                    marked.push(coin);
                }
                for mut coin in self.right.drain(..) {
                    coin.mark_standard();
                    marked.push(coin);
                }
                // A coin left off the pans learns nothing from a balanced read.
                marked.append(&mut self.aside);
            }
        }

        match known {
            Some(Deviation::Lighter) => {
                for coin in &mut marked {
                    coin.mark_lighter();
                }
            }
            Some(Deviation::Heavier) => {
                for coin in &mut marked {
                    coin.mark_heavier();
                }
            }
            None => {}
        }

        self.weighings_remaining = self.weighings_remaining.saturating_sub(1);
        marked
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
