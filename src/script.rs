//! Deterministic channel implementations for tests, demos and integration.
//!
//! The engine never talks to hardware directly — it drives a
//! [`BalanceChannel`]. This module provides two in-process implementations:
//!
//! - [`ScriptedChannel`] replays a fixed outcome sequence, for exercising
//!   specific decision paths (including adversarial ones).
//! - [`OracleJudge`] hides a secret counterfeit and answers every weighing
//!   the way a real balance would, for end-to-end correctness sweeps.
//!
//! Both record the traffic they see, so a test can assert on the exact pan
//! assignments the solver produced as well as on the final result.

use std::collections::VecDeque;

use crate::coin::{Coin, CoinId, Deviation};
use crate::plan::{Outcome, WeighingPlan};
use crate::solver::{BalanceChannel, Resolution};

/// A pan assignment as seen by a channel, reduced to coin ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentPlan {
    /// Ids on the left pan, in pan order.
    pub left: Vec<CoinId>,
    /// Ids on the right pan, in pan order.
    pub right: Vec<CoinId>,
    /// Ids set aside, in order.
    pub aside: Vec<CoinId>,
}

impl SentPlan {
    fn capture(plan: &WeighingPlan) -> Self {
        let ids = |coins: &[Coin]| coins.iter().map(Coin::id).collect();
        Self {
            left: ids(plan.left()),
            right: ids(plan.right()),
            aside: ids(plan.aside()),
        }
    }
}

/// Replays a fixed sequence of outcomes and records all traffic.
///
/// Once the script is exhausted every further weighing reads balanced — the
/// least informative answer an adversarial judge can give.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChannel {
    outcomes: VecDeque<Outcome>,
    plans: Vec<SentPlan>,
    reported: Option<Resolution>,
}

impl ScriptedChannel {
    /// A channel that will answer with `outcomes` in order.
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes: outcomes.into(),
            plans: Vec::new(),
            reported: None,
        }
    }

    /// A channel whose every answer is [`Outcome::Balanced`].
    pub fn always_balanced() -> Self {
        Self::new(Vec::new())
    }

    /// Every pan assignment received so far.
    pub fn plans(&self) -> &[SentPlan] {
        &self.plans
    }

    /// The final result, once reported.
    pub fn reported(&self) -> Option<Resolution> {
        self.reported
    }
}

impl BalanceChannel for ScriptedChannel {
    fn send_plan(&mut self, plan: &WeighingPlan) {
        self.plans.push(SentPlan::capture(plan));
    }

    fn receive_outcome(&mut self) -> Outcome {
        self.outcomes.pop_front().unwrap_or(Outcome::Balanced)
    }

    fn report_result(&mut self, result: &Resolution) {
        self.reported = Some(*result);
    }
}

/// Judges every weighing against a hidden counterfeit.
///
/// Genuine coins weigh the same; the secret coin tips its pan according to
/// its deviation. Because the solver always builds equal-sized pans, the
/// read is determined entirely by which pan (if either) holds the secret.
#[derive(Clone, Debug)]
pub struct OracleJudge {
    secret: CoinId,
    deviation: Deviation,
    plans: Vec<SentPlan>,
    reported: Option<Resolution>,
}

impl OracleJudge {
    /// A judge hiding `secret` as the counterfeit, deviating in `deviation`.
    pub fn new(secret: CoinId, deviation: Deviation) -> Self {
        Self {
            secret,
            deviation,
            plans: Vec::new(),
            reported: None,
        }
    }

    /// The secret the judge is hiding, as a [`Resolution`] for comparison
    /// against a solver's answer.
    pub fn expected(&self) -> Resolution {
        Resolution::Resolved {
            coin: self.secret,
            deviation: self.deviation,
        }
    }

    /// Every pan assignment received so far.
    pub fn plans(&self) -> &[SentPlan] {
        &self.plans
    }

    /// The final result, once reported.
    pub fn reported(&self) -> Option<Resolution> {
        self.reported
    }
}

impl BalanceChannel for OracleJudge {
    fn send_plan(&mut self, plan: &WeighingPlan) {
        self.plans.push(SentPlan::capture(plan));
    }

    fn receive_outcome(&mut self) -> Outcome {
        let Some(plan) = self.plans.last() else {
            return Outcome::Balanced;
        };
        let on_left = plan.left.contains(&self.secret);
        let on_right = plan.right.contains(&self.secret);
        match (on_left, on_right, self.deviation) {
            (true, _, Deviation::Heavier) | (_, true, Deviation::Lighter) => Outcome::LeftHeavier,
            (true, _, Deviation::Lighter) | (_, true, Deviation::Heavier) => Outcome::RightHeavier,
            _ => Outcome::Balanced,
        }
    }

    fn report_result(&mut self, result: &Resolution) {
        self.reported = Some(*result);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
