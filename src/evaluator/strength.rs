use crate::cards::Rank;
use crate::hand::Hand;
use core::cmp::Ordering;

/// Key of a hand under the longer-stronger order.
///
/// Field order drives the derived `Ord`: length first, then the ascending
/// rank sequence compared position by position. Suits never take part.
///
/// ```
/// use poker_hands::hand::Hand;
///
/// let pair: Hand = "Ac Ad".parse().unwrap();
/// let trips: Hand = "2c 2d 2h".parse().unwrap();
/// assert!(trips.strength() > pair.strength());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Strength {
    len: usize,
    ranks: Vec<Rank>,
}

impl Strength {
    pub fn of(hand: &Hand) -> Self {
        Self { len: hand.len(), ranks: hand.sorted_ranks() }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Ranks sorted ascending.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }
}

/// Compare two hands: the longer one wins, equal lengths fall back to ranks.
pub fn longer_stronger(a: &Hand, b: &Hand) -> Ordering {
    a.strength().cmp(&b.strength())
}
