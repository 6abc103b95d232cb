//! Coins and their classification markers.
//!
//! A [`Coin`] carries a stable identity and a [`Marker`] recording everything
//! the weighings so far have proven about it. Markers only change through the
//! three marking operations, and the transition table is the correctness
//! contract the rest of the engine leans on:
//!
//! ```text
//!                mark_lighter   mark_heavier   mark_standard
//! Unmarked    →  Lighter        Heavier        Standard
//! Lighter     →  Lighter        Standard       Standard
//! Heavier     →  Standard       Heavier        Standard
//! Standard    →  Standard       Standard       Standard
//! ```
//!
//! A coin implicated as heavier in one weighing and lighter in another cannot
//! be the counterfeit — contradictory evidence resolves to [`Marker::Standard`].

use core::fmt;

/// Stable identity of a coin, `1..=N` for a puzzle of `N` coins.
pub type CoinId = u16;

/// What the weighings so far have proven about a coin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    /// No weighing has implicated this coin yet.
    Unmarked,
    /// Sat on the lighter pan of an unbalanced weighing; may be the light counterfeit.
    Lighter,
    /// Sat on the heavier pan of an unbalanced weighing; may be the heavy counterfeit.
    Heavier,
    /// Proven genuine — usable as a reference weight.
    Standard,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Marker::Unmarked => "unmarked",
            Marker::Lighter => "lighter",
            Marker::Heavier => "heavier",
            Marker::Standard => "standard",
        };
        f.write_str(name)
    }
}

/// The direction in which the counterfeit deviates from genuine coins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Deviation {
    /// The counterfeit weighs less than a genuine coin.
    Lighter,
    /// The counterfeit weighs more than a genuine coin.
    Heavier,
}

impl From<Deviation> for Marker {
    fn from(deviation: Deviation) -> Self {
        match deviation {
            Deviation::Lighter => Marker::Lighter,
            Deviation::Heavier => Marker::Heavier,
        }
    }
}

/// One coin of the puzzle: identity plus current classification.
///
/// Coins are created once per puzzle run and never destroyed mid-run; the
/// marker mutates only through [`Coin::mark_lighter`], [`Coin::mark_heavier`]
/// and [`Coin::mark_standard`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coin {
    id: CoinId,
    marker: Marker,
}

impl Coin {
    /// Construct a fresh, unmarked coin.
    pub fn new(id: CoinId) -> Self {
        Self {
            id,
            marker: Marker::Unmarked,
        }
    }

    /// The coin's stable identity.
    pub fn id(&self) -> CoinId {
        self.id
    }

    /// The coin's current classification.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Record evidence that this coin may be lighter than genuine.
    ///
    /// A coin previously implicated as heavier is thereby proven genuine.
    pub fn mark_lighter(&mut self) {
        self.marker = match self.marker {
            Marker::Standard | Marker::Heavier => Marker::Standard,
            Marker::Unmarked | Marker::Lighter => Marker::Lighter,
        };
    }

    /// Record evidence that this coin may be heavier than genuine.
    ///
    /// A coin previously implicated as lighter is thereby proven genuine.
    pub fn mark_heavier(&mut self) {
        self.marker = match self.marker {
            Marker::Standard | Marker::Lighter => Marker::Standard,
            Marker::Unmarked | Marker::Heavier => Marker::Heavier,
        };
    }

    /// Record proof that this coin is genuine.
    pub fn mark_standard(&mut self) {
        self.marker = Marker::Standard;
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
