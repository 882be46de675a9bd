//! Best-of selection within a single category.
//!
//! Two orders live here and are deliberately kept apart:
//! - [`Strength`], the longer-stronger order used by [`all_best`] and the
//!   category wrappers;
//! - triple rank then pair rank, used only by [`best_full_houses`].
//!
//! Running every full house through [`all_best`] would compare sorted rank
//! sequences and pick QQQAA over KKK22, which is wrong for full houses.

mod best;
mod full_house;
mod strength;

pub use best::{all_best, best_flushes, best_sets, best_straights};
pub use full_house::{best_full_houses, find_full_houses, split_full_house, FullHouseParts};
pub use strength::{longer_stronger, Strength};

/// Smallest group `best_sets` considers by default (a pair).
pub const DEFAULT_SET_MINIMUM: usize = 2;

/// Smallest run `best_flushes` and `best_straights` consider by default.
pub const DEFAULT_RUN_MINIMUM: usize = 1;

/// Number of cards in a full house.
pub const FULL_HOUSE_LEN: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("no full house can be made from the hand")]
    NoFullHouseAvailable,
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}
