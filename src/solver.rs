//! The solver loop — drives weighings until the counterfeit is identified.
//!
//! One [`SolverLoop`] owns one puzzle run: a [`CoinRegistry`], a
//! [`WeighingPlan`], and an injected [`BalanceChannel`] through which plans
//! go out and outcomes come back. The loop is strictly sequential — every
//! round depends on the previous round's outcome — and each round is atomic:
//! the pools are never left partially redistributed between rounds.
//!
//! ```text
//! CoinRegistry ── PartitionStrategy ──▶ WeighingPlan ── send_plan ──▶ channel
//!      ▲                                     │                          │
//!      └───────── redistribute ◀── apply_outcome ◀──── receive_outcome ─┘
//! ```
//!
//! The run terminates when the registry is resolved (no unmarked coin, at
//! most one candidate) or the weighings budget is spent. Running out of
//! weighings is not an error: it yields [`Resolution::Unsolvable`], reported
//! through the channel like any other result.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::coin::{CoinId, Deviation};
use crate::error::SolverError;
use crate::plan::{Outcome, WeighingPlan};
use crate::registry::CoinRegistry;
use crate::strategy::PartitionStrategy;

/// Configuration of one puzzle run.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Number of coins in the puzzle, ids `1..=num_coins`. Must be at least 1.
    pub num_coins: u16,
    /// The counterfeit's deviation, when known a priori. `None` means the
    /// counterfeit may be lighter or heavier.
    pub known_deviation: Option<Deviation>,
    /// Shuffle pool order before each weighing. Purely cosmetic — it varies
    /// which coins land on which pan between runs without affecting
    /// correctness.
    pub randomize_order: bool,
}

impl SolverConfig {
    /// Configuration for `num_coins` coins of unknown deviation, no shuffling.
    pub fn new(num_coins: u16) -> Self {
        Self {
            num_coins,
            known_deviation: None,
            randomize_order: false,
        }
    }
}

/// Terminal result of a puzzle run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// The counterfeit was identified.
    Resolved {
        /// Identity of the counterfeit coin.
        coin: CoinId,
        /// Direction in which it deviates from genuine coins.
        deviation: Deviation,
    },
    /// The weighings budget cannot disambiguate the puzzle — either the
    /// budget ran out with multiple candidates left, or every coin was
    /// proven genuine (the reported outcomes admit no counterfeit).
    Unsolvable,
}

/// The abstract channel between the decision engine and whatever judges the
/// weighings — a human at a physical balance, a hardware rig, or a test
/// script. Encoding, framing and transport are entirely the implementor's
/// concern; the engine only ever sees plans and three-valued outcomes.
pub trait BalanceChannel {
    /// Present a pan assignment to the judge.
    fn send_plan(&mut self, plan: &WeighingPlan);

    /// Block until the judge reports how the balance read.
    fn receive_outcome(&mut self) -> Outcome;

    /// Hand off the final result.
    fn report_result(&mut self, result: &Resolution);
}

/// Drives one puzzle run over an injected channel.
///
/// Construct fresh per run; registry and plan are owned exclusively and
/// never shared across runs.
#[derive(Debug)]
pub struct SolverLoop<C: BalanceChannel, R: Rng = StdRng> {
    config: SolverConfig,
    registry: CoinRegistry,
    plan: WeighingPlan,
    channel: C,
    rng: R,
}

impl<C: BalanceChannel> SolverLoop<C, StdRng> {
    /// Construct a solver seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidCoinCount`] if `config.num_coins == 0`.
    pub fn new(config: SolverConfig, channel: C) -> Result<Self, SolverError> {
        Self::with_rng(config, channel, StdRng::from_entropy())
    }
}

impl<C: BalanceChannel, R: Rng> SolverLoop<C, R> {
    /// Construct a solver with an explicit rng, for deterministic shuffling
    /// in tests.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidCoinCount`] if `config.num_coins == 0`.
    pub fn with_rng(config: SolverConfig, channel: C, rng: R) -> Result<Self, SolverError> {
        Ok(Self {
            registry: CoinRegistry::new(config.num_coins)?,
            plan: WeighingPlan::new(config.num_coins)?,
            config,
            channel,
            rng,
        })
    }

    /// Run weighings until the puzzle is resolved or the budget is spent,
    /// report the result through the channel, and return it.
    ///
    /// # Errors
    ///
    /// [`SolverError::InsufficientCoins`] if the partition arithmetic and
    /// the registry desynchronise (see [`PartitionStrategy::fill`]).
    pub fn run(&mut self) -> Result<Resolution, SolverError> {
        let mut round = 0u32;
        while !self.registry.is_resolved() && self.plan.weighings_remaining() > 0 {
            round += 1;
            if self.config.randomize_order {
                self.registry.shuffle_all(&mut self.rng);
            }

            PartitionStrategy::fill(&mut self.plan, &mut self.registry)?;
            self.channel.send_plan(&self.plan);
            let outcome = self.channel.receive_outcome();
            debug!(
                round,
                ?outcome,
                left = self.plan.left().len(),
                right = self.plan.right().len(),
                aside = self.plan.aside().len(),
                remaining = self.plan.weighings_remaining(),
                "weighing complete"
            );

            let marked = self.plan.apply_outcome(outcome, self.config.known_deviation);
            self.registry.redistribute(marked);
        }

        let resolution = match self.registry.sole_candidate() {
            Some((coin, deviation)) if self.registry.is_resolved() => {
                Resolution::Resolved { coin, deviation }
            }
            _ => Resolution::Unsolvable,
        };
        debug!(round, ?resolution, "run finished");
        self.channel.report_result(&resolution);
        Ok(resolution)
    }

    /// The channel, for inspecting recorded traffic after a run.
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Consume the solver and return its channel.
    pub fn into_channel(self) -> C {
        self.channel
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
