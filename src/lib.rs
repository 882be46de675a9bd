//! poker-hands: pick the best sub-hands out of a larger hand of cards
//!
//! Goals:
//! - Rank hands *within* one category (sets, flushes, straights, full houses)
//! - Return every hand tied for best, not just one
//! - No panics for malformed input; use `Result` for recoverable errors
//!
//! Sets, flushes and straights are ranked by the longer-stronger order: the
//! longer hand wins, equal lengths compare their ranks sorted ascending. Full
//! houses have their own order: triple rank first, then pair rank.
//!
//! ## Quick start
//! ```
//! use poker_hands::evaluator::{best_full_houses, best_sets, DEFAULT_SET_MINIMUM};
//! use poker_hands::hand::Hand;
//!
//! let hand: Hand = "Ac Ad Ah Kc Kd 7s 2h".parse().unwrap();
//!
//! let sets = best_sets(&hand, DEFAULT_SET_MINIMUM);
//! assert_eq!(sets.len(), 1);
//! assert_eq!(sets[0].to_string(), "Ac Ad Ah");
//!
//! let full_houses = best_full_houses(&hand).unwrap();
//! assert_eq!(full_houses[0].to_string(), "Ac Ad Ah Kc Kd");
//! ```
//!
//! ## Logging
//! Selection steps emit `tracing` events (TRACE per candidate, DEBUG per
//! result). Install any subscriber to see them.

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod finders;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
