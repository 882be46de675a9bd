use crate::finders::{find_flushes, find_sets, find_straights};
use crate::hand::Hand;
use core::cmp::Ordering;
use tracing::event;

/// Every hand tied for best under the longer-stronger order, in input order.
///
/// Single pass, no sort. An empty input gives an empty result.
///
/// ```
/// use poker_hands::evaluator::all_best;
/// use poker_hands::hand::Hand;
///
/// let hands: Vec<Hand> = ["Kc Kd", "2c 2d 2h", "3s 3h 3c"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let best = all_best(hands);
/// assert_eq!(best.len(), 1);
/// assert_eq!(best[0].to_string(), "3s 3h 3c");
/// ```
pub fn all_best<I>(hands: I) -> Vec<Hand>
where
    I: IntoIterator<Item = Hand>,
{
    let mut iter = hands.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut best_key = first.strength();
    let mut best = vec![first];
    for hand in iter {
        let key = hand.strength();
        match key.cmp(&best_key) {
            Ordering::Equal => {
                event!(tracing::Level::TRACE, %hand, "tied for best");
                best.push(hand);
            }
            Ordering::Greater => {
                event!(tracing::Level::TRACE, %hand, dropped = best.len(), "new best");
                best_key = key;
                best.clear();
                best.push(hand);
            }
            Ordering::Less => {}
        }
    }

    event!(tracing::Level::DEBUG, ties = best.len(), len = best_key.len(), "all_best done");
    best
}

/// Best same-rank groups of at least `minimum` cards.
pub fn best_sets(hand: &Hand, minimum: usize) -> Vec<Hand> {
    all_best(find_sets(hand, minimum))
}

/// Best same-suit groups of at least `minimum` cards.
pub fn best_flushes(hand: &Hand, minimum: usize) -> Vec<Hand> {
    all_best(find_flushes(hand, minimum))
}

/// Best consecutive-rank runs of at least `minimum` cards.
pub fn best_straights(hand: &Hand, minimum: usize) -> Vec<Hand> {
    all_best(find_straights(hand, minimum))
}
