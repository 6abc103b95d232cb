//! # balance-core
//!
//! Adaptive decision engine for the classic counterfeit-coin balance puzzle.
//!
//! Among `N` coins one is counterfeit — heavier, lighter, or deviating in an
//! unknown direction — and a two-pan balance must identify the coin *and* its
//! deviation within the information-theoretic budget of `w` weighings, where
//! `(3^w − 1) / 2 ≥ N`. The engine is purely a decision maker: it builds a
//! pan assignment each round, consumes the three-valued outcome, and
//! reclassifies coins until a single candidate remains.
//!
//! ## The pipeline
//!
//! ```text
//! CoinRegistry ── PartitionStrategy ──▶ WeighingPlan ──▶ BalanceChannel
//!      ▲                                     │                 │
//!      └──────── redistribute ◀── apply_outcome ◀── Outcome ◀──┘
//! ```
//!
//! Classification is a four-state marker per coin — unmarked, lighter,
//! heavier, standard — with one key rule: contradictory evidence (implicated
//! as heavier in one weighing, lighter in another) proves a coin genuine.
//! That rule is what lets every weighing extract a full trit of information.
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`coin`] | [`Coin`], [`Marker`], [`Deviation`] | Coin identity and the marking transition table |
//! | [`registry`] | [`CoinRegistry`], [`PoolCounts`] | Four disjoint classification pools with retrieval and redistribution |
//! | [`plan`] | [`WeighingPlan`], [`Outcome`] | Pan assignment, outcome-driven reclassification, weighings budget |
//! | [`strategy`] | [`PartitionStrategy`] | The three-regime split deciding what goes on each pan |
//! | [`solver`] | [`SolverLoop`], [`BalanceChannel`], [`Resolution`] | The round loop over an injected channel |
//! | [`script`] | [`script::ScriptedChannel`], [`script::OracleJudge`] | Deterministic channels for tests and demos |
//! | [`error`] | [`SolverError`] | Fault taxonomy (running out of weighings is *not* a fault) |
//!
//! ## Driving the engine
//!
//! The physical side of the puzzle — presenting a weighing to a judge,
//! reading the balance, transport framing — lives behind the
//! [`BalanceChannel`] trait. Inject any implementation:
//!
//! ```rust
//! use balance_core::script::OracleJudge;
//! use balance_core::{Deviation, Resolution, SolverConfig, SolverLoop};
//!
//! // A judge that knows coin 7 is the light counterfeit.
//! let judge = OracleJudge::new(7, Deviation::Lighter);
//! let mut solver = SolverLoop::new(SolverConfig::new(12), judge).unwrap();
//!
//! let result = solver.run().unwrap();
//! assert_eq!(result, Resolution::Resolved { coin: 7, deviation: Deviation::Lighter });
//! ```
//!
//! ## Features
//!
//! - `serde` — `Serialize`/`Deserialize` derives on the public data types
//!   ([`Marker`], [`Outcome`], [`Resolution`], [`SolverConfig`], ...).

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod coin;
pub mod error;
pub mod plan;
pub mod registry;
pub mod script;
pub mod solver;
pub mod strategy;

pub use coin::{Coin, CoinId, Deviation, Marker};
pub use error::SolverError;
pub use plan::{capacity, required_weighings, Outcome, WeighingPlan};
pub use registry::{CoinRegistry, PoolCounts};
pub use solver::{BalanceChannel, Resolution, SolverConfig, SolverLoop};
pub use strategy::PartitionStrategy;
