//! The partitioning strategy — which coins go on which pan.
//!
//! Given the current pool sizes, [`PartitionStrategy::fill`] decides how many
//! coins of each class to place on the left pan, the right pan, and aside, so
//! that the worst-case outcome still leaves the puzzle solvable within the
//! remaining weighings. Three regimes cover every reachable state:
//!
//! 1. **Everything unmarked** (the first weighing): split the unmarked coins
//!    as evenly as possible into thirds, per-side count rounded up.
//! 2. **Everything marked** (only lighter-vs-heavier ambiguity remains, no
//!    reference needed or available): per-side budget `ceil(viable / 3)`.
//!    Light candidates are paired light-vs-light across the pans first, then
//!    heavy candidates heavy-vs-heavy; any heavy candidate left unpaired
//!    inside the budget is weighed one-for-one against a proven-standard
//!    reference coin. Unplaced candidates go aside.
//! 3. **Standard coins known, unmarked remain**: a third of the unmarked
//!    coins (rounded down) stays aside, the rest go on the left pan against
//!    an equal count of standard coins on the right — a direct test against
//!    a trusted reference.
//!
//! The ceiling/floor choices are load-bearing: rounding the other way on any
//! of them overruns the weighings budget on some coin counts. Mixing a light
//! candidate against a heavy candidate on opposite pans is never done — such
//! a pairing biases the read and destroys a trit of information.

use tracing::trace;

use crate::coin::Marker;
use crate::error::SolverError;
use crate::plan::WeighingPlan;
use crate::registry::{CoinRegistry, PoolCounts};

/// Fills a [`WeighingPlan`] from a [`CoinRegistry`] according to the current
/// classification state.
#[derive(Clone, Copy, Debug, Default)]
pub struct PartitionStrategy;

impl PartitionStrategy {
    /// Assign coins from `pools` onto `plan` for the next weighing.
    ///
    /// # Errors
    ///
    /// [`SolverError::InsufficientCoins`] if a pool holds fewer coins than
    /// the computed split requires. With pool counts read from the same
    /// registry this indicates a desynchronisation bug in the caller, with
    /// one exception: regime 2 may legitimately demand a standard reference
    /// coin before any exists (possible only for puzzles below the classic
    /// sizes, e.g. two coins of unknown deviation).
    pub fn fill(plan: &mut WeighingPlan, pools: &mut CoinRegistry) -> Result<(), SolverError> {
        let counts = pools.counts();
        if counts.unmarked == 0 {
            Self::split_candidates(plan, pools, counts)
        } else if counts.standard != 0 {
            Self::split_against_reference(plan, pools, counts)
        } else {
            Self::split_first_weighing(plan, pools, counts)
        }
    }

    /// Regime 1: no classification information yet. Even three-way split of
    /// the unmarked pool, per-side count rounded up.
    fn split_first_weighing(
        plan: &mut WeighingPlan,
        pools: &mut CoinRegistry,
        counts: PoolCounts,
    ) -> Result<(), SolverError> {
        let unmarked = counts.unmarked;
        // ceil(u/3), capped at u/2 so a single coin is never weighed
        // against an empty pan.
        let per_side = unmarked.div_ceil(3).min(unmarked / 2);
        let aside = unmarked - 2 * per_side;
        trace!(unmarked, per_side, aside, "first weighing split");

        plan.extend_left(pools.take_from(Marker::Unmarked, per_side)?);
        plan.extend_right(pools.take_from(Marker::Unmarked, per_side)?);
        plan.extend_aside(pools.take_from(Marker::Unmarked, aside)?);
        Ok(())
    }

    /// Regime 2: every coin is marked; only the lighter/heavier candidate
    /// pools still matter. Pair like against like across the pans, then use
    /// standard references for an unpaired heavy candidate.
    fn split_candidates(
        plan: &mut WeighingPlan,
        pools: &mut CoinRegistry,
        counts: PoolCounts,
    ) -> Result<(), SolverError> {
        let viable = counts.viable();
        let mut per_side = viable.div_ceil(3);
        let mut light = counts.lighter;
        let mut heavy = counts.heavier;

        // Light candidates, paired light-vs-light across the pans.
        let light_pairs = (light / 2).min(per_side);
        plan.extend_left(pools.take_from(Marker::Lighter, light_pairs)?);
        plan.extend_right(pools.take_from(Marker::Lighter, light_pairs)?);
        light -= 2 * light_pairs;
        per_side -= light_pairs;

        // Heavy candidates, paired heavy-vs-heavy.
        let heavy_pairs = (heavy / 2).min(per_side);
        plan.extend_left(pools.take_from(Marker::Heavier, heavy_pairs)?);
        plan.extend_right(pools.take_from(Marker::Heavier, heavy_pairs)?);
        heavy -= 2 * heavy_pairs;
        per_side -= heavy_pairs;

        // A heavy candidate left unpaired inside the budget is weighed
        // against a proven-standard reference instead of another candidate.
        let vs_reference = per_side.min(heavy);
        plan.extend_left(pools.take_from(Marker::Heavier, vs_reference)?);
        plan.extend_right(pools.take_from(Marker::Standard, vs_reference)?);
        heavy -= vs_reference;

        // Unplaced candidates sit this round out.
        plan.extend_aside(pools.take_from(Marker::Heavier, heavy)?);
        plan.extend_aside(pools.take_from(Marker::Lighter, light)?);

        trace!(
            viable,
            light_pairs,
            heavy_pairs,
            vs_reference,
            aside = heavy + light,
            "candidate split"
        );
        Ok(())
    }

    /// Regime 3: standard references exist and unmarked coins remain. Test
    /// two thirds of the unmarked coins directly against references.
    fn split_against_reference(
        plan: &mut WeighingPlan,
        pools: &mut CoinRegistry,
        counts: PoolCounts,
    ) -> Result<(), SolverError> {
        let aside = counts.unmarked / 3;
        let per_side = counts.unmarked - aside;
        trace!(unmarked = counts.unmarked, per_side, aside, "reference split");

        plan.extend_left(pools.take_from(Marker::Unmarked, per_side)?);
        plan.extend_right(pools.take_from(Marker::Standard, per_side)?);
        plan.extend_aside(pools.take_from(Marker::Unmarked, aside)?);
        Ok(())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
