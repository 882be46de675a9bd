//! Primitive combination finders.
//!
//! These only enumerate candidate groupings; picking the best of them is the
//! evaluator's job. A `minimum` of zero behaves like one, since an empty group
//! is never returned.

use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;

/// One group per rank holding at least `minimum` cards, highest rank first.
/// Cards inside a group keep their order in `hand`.
///
/// ```
/// use poker_hands::finders::find_sets;
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "7c Kd 7h Ks 2c".parse().unwrap();
/// let sets = find_sets(&hand, 2);
/// assert_eq!(sets.len(), 2);
/// assert_eq!(sets[0].to_string(), "Kd Ks");
/// assert_eq!(sets[1].to_string(), "7c 7h");
/// ```
pub fn find_sets(hand: &Hand, minimum: usize) -> Vec<Hand> {
    Rank::ALL
        .iter()
        .rev()
        .map(|&rank| hand.iter().copied().filter(|c| c.rank() == rank).collect::<Hand>())
        .filter(|group| !group.is_empty() && group.len() >= minimum)
        .collect()
}

/// One group per suit holding at least `minimum` cards, in suit order.
pub fn find_flushes(hand: &Hand, minimum: usize) -> Vec<Hand> {
    Suit::ALL
        .iter()
        .map(|&suit| hand.iter().copied().filter(|c| c.suit() == suit).collect::<Hand>())
        .filter(|group| !group.is_empty() && group.len() >= minimum)
        .collect()
}

/// Maximal runs of consecutive ranks, at least `minimum` long, lowest run first.
///
/// Each rank contributes its first card in `hand`. Ace plays high only.
pub fn find_straights(hand: &Hand, minimum: usize) -> Vec<Hand> {
    let mut distinct: Vec<Card> = Vec::with_capacity(hand.len());
    for &card in hand {
        if !distinct.iter().any(|c| c.rank() == card.rank()) {
            distinct.push(card);
        }
    }
    distinct.sort_by_key(|c| c.rank());

    let mut runs: Vec<Hand> = Vec::new();
    let mut current: Vec<Card> = Vec::new();
    for card in distinct {
        let extends = current.last().is_some_and(|prev| prev.rank().value() + 1 == card.rank().value());
        if !extends && !current.is_empty() {
            runs.push(Hand::new(std::mem::take(&mut current)));
        }
        current.push(card);
    }
    if !current.is_empty() {
        runs.push(Hand::new(current));
    }

    runs.retain(|run| run.len() >= minimum);
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn sets_respect_minimum() {
        let h = hand("Ah Ad Ac Kh Kd 9s");
        let triples = find_sets(&h, 3);
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].to_string(), "Ah Ad Ac");

        assert_eq!(find_sets(&h, 2).len(), 2);
        assert_eq!(find_sets(&h, 1).len(), 3);
        assert_eq!(find_sets(&h, 0).len(), 3);
    }

    #[test]
    fn sets_of_empty_hand() {
        assert!(find_sets(&Hand::empty(), 1).is_empty());
    }

    #[test]
    fn flushes_group_by_suit() {
        let h = hand("2h 9s Kh 4h 3s");
        let flushes = find_flushes(&h, 1);
        assert_eq!(flushes.len(), 2);
        assert_eq!(flushes[0].to_string(), "2h Kh 4h");
        assert_eq!(flushes[1].to_string(), "9s 3s");
        assert_eq!(find_flushes(&h, 3).len(), 1);
    }

    #[test]
    fn straights_split_on_gaps() {
        let h = hand("9c 2d 3h Ts 4c Jd 8h");
        let runs = find_straights(&h, 1);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].to_string(), "2d 3h 4c");
        assert_eq!(runs[1].to_string(), "8h 9c Ts Jd");
        assert_eq!(find_straights(&h, 4).len(), 1);
    }

    #[test]
    fn straights_use_first_card_of_each_rank() {
        let h = hand("5h 6c 5s 7d");
        let runs = find_straights(&h, 3);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].to_string(), "5h 6c 7d");
    }

    #[test]
    fn ace_does_not_wrap_to_two() {
        let h = hand("As 2c 3d Kh");
        let runs = find_straights(&h, 1);
        let tops: Vec<Rank> = runs.iter().map(|r| r.sorted_ranks()[r.len() - 1]).collect();
        assert_eq!(tops, vec![Rank::Three, Rank::Ace]);
    }
}
