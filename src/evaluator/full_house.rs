use super::{EvalError, FULL_HOUSE_LEN};
use crate::cards::Rank;
use crate::finders::find_sets;
use crate::hand::Hand;
use tracing::event;

/// A full house split into its three-of-a-kind and its pair.
///
/// Only [`split_full_house`] builds one, so both parts are always single-ranked.
///
/// ```compile_fail
/// use poker_hands::evaluator::FullHouseParts;
/// use poker_hands::hand::Hand;
///
/// let _ = FullHouseParts { triple: Hand::empty(), pair: Hand::empty() };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullHouseParts {
    triple: Hand,
    pair: Hand,
    triple_rank: Rank,
    pair_rank: Rank,
}

impl FullHouseParts {
    pub fn triple(&self) -> &Hand {
        &self.triple
    }

    pub fn pair(&self) -> &Hand {
        &self.pair
    }

    pub fn triple_rank(&self) -> Rank {
        self.triple_rank
    }

    pub fn pair_rank(&self) -> Rank {
        self.pair_rank
    }

    /// Both parts back together, triple first.
    pub fn rejoin(&self) -> Hand {
        &self.triple + &self.pair
    }
}

/// Every full house that can be built from `hand`.
///
/// Each rank is used at most once as the triple and once as the pair, so four
/// Kings and four Sevens give exactly two full houses. A rank never pairs with
/// itself, even when repeated cards leave five or more of it. Which suits end up
/// in a full house follows the card order of `hand`.
///
/// ```
/// use poker_hands::evaluator::find_full_houses;
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "Kc Kd Kh Ks 7c 7d 7h 7s".parse().unwrap();
/// let found = find_full_houses(&hand);
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].to_string(), "Kc Kd Kh 7c 7d");
/// assert_eq!(found[1].to_string(), "7c 7d 7h Kc Kd");
/// ```
pub fn find_full_houses(hand: &Hand) -> Vec<Hand> {
    let mut full_houses = Vec::new();
    for triple in find_sets(hand, 3) {
        let triple = triple.truncated(3);
        let triple_rank = triple.first().map(|c| c.rank());
        let remainder = hand - &triple;
        for pair in find_sets(&remainder, 2) {
            if pair.first().map(|c| c.rank()) == triple_rank {
                continue;
            }
            full_houses.push(&triple + &pair.truncated(2));
        }
    }
    full_houses
}

/// Split a full house into its triple and pair.
///
/// The input must be exactly five cards: three of one rank and two of another.
/// Anything else is rejected with [`EvalError::PreconditionViolation`].
pub fn split_full_house(full_house: &Hand) -> Result<FullHouseParts, EvalError> {
    if full_house.len() != FULL_HOUSE_LEN {
        return Err(violation(full_house, "expected five cards"));
    }
    let mut triples = find_sets(full_house, 3).into_iter();
    let triple = match (triples.next(), triples.next()) {
        (Some(triple), None) if triple.len() == 3 => triple,
        _ => return Err(violation(full_house, "expected exactly one three of a kind")),
    };
    let pair = full_house - &triple;
    let (Some(t), Some(p)) = (triple.first(), pair.first()) else {
        return Err(violation(full_house, "missing triple or pair"));
    };
    if !pair.iter().all(|c| c.rank() == p.rank()) {
        return Err(violation(full_house, "remaining two cards are not a pair"));
    }
    Ok(FullHouseParts { triple_rank: t.rank(), pair_rank: p.rank(), triple, pair })
}

fn violation(hand: &Hand, reason: &str) -> EvalError {
    event!(tracing::Level::DEBUG, %hand, reason, "not a full house");
    EvalError::PreconditionViolation(format!("{reason}: [{hand}]"))
}

/// The best full houses in `hand`: higher triple wins, then higher pair.
///
/// This is not the longer-stronger order. KKK22 beats QQQAA here even though
/// its ascending rank sequence starts lower.
///
/// ```
/// use poker_hands::evaluator::best_full_houses;
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "Kc Kd Kh 2c 2d Qc Qd Qh Ac Ad".parse().unwrap();
/// let best = best_full_houses(&hand).unwrap();
/// assert_eq!(best.len(), 1);
/// assert_eq!(best[0].to_string(), "Kc Kd Kh Ac Ad");
/// ```
pub fn best_full_houses(hand: &Hand) -> Result<Vec<Hand>, EvalError> {
    let candidates = find_full_houses(hand);
    if candidates.is_empty() {
        event!(tracing::Level::DEBUG, %hand, "no full house");
    }
    select_best_full_houses(candidates)
}

// find_full_houses yields at most one candidate per (triple rank, pair rank), so
// the tie branch only matters for candidates gathered some other way.
fn select_best_full_houses<I>(candidates: I) -> Result<Vec<Hand>, EvalError>
where
    I: IntoIterator<Item = Hand>,
{
    let mut full_houses = candidates.into_iter();
    let Some(first) = full_houses.next() else {
        return Err(EvalError::NoFullHouseAvailable);
    };

    let parts = split_full_house(&first)?;
    let mut triple_rank = parts.triple_rank();
    let mut pair_rank = parts.pair_rank();
    let mut best = vec![first];
    for full_house in full_houses {
        let parts = split_full_house(&full_house)?;
        let (t, p) = (parts.triple_rank(), parts.pair_rank());
        if t > triple_rank || (t == triple_rank && p > pair_rank) {
            event!(tracing::Level::TRACE, %full_house, "new best full house");
            triple_rank = t;
            pair_rank = p;
            best.clear();
            best.push(full_house);
        } else if t == triple_rank && p == pair_rank {
            event!(tracing::Level::TRACE, %full_house, "tied full house");
            best.push(full_house);
        }
    }

    event!(
        tracing::Level::DEBUG,
        %triple_rank,
        %pair_rank,
        ties = best.len(),
        "best_full_houses done"
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::all_best;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test_log::test]
    fn no_triples_means_no_full_houses() {
        assert!(find_full_houses(&hand("Kc Kd 7c 7d 2s")).is_empty());
    }

    #[test_log::test]
    fn triple_without_pair_gives_nothing() {
        assert!(find_full_houses(&hand("Kc Kd Kh 7c 2s")).is_empty());
    }

    #[test_log::test]
    fn two_triples_pair_with_each_other() {
        let found = find_full_houses(&hand("9c 9d 9h 4c 4d 4h"));
        let ranks: Vec<(Rank, Rank)> = found
            .iter()
            .map(|fh| {
                let parts = split_full_house(fh).unwrap();
                (parts.triple_rank(), parts.pair_rank())
            })
            .collect();
        assert_eq!(ranks, vec![(Rank::Nine, Rank::Four), (Rank::Four, Rank::Nine)]);
    }

    #[test_log::test]
    fn one_triple_with_several_pairs() {
        let found = find_full_houses(&hand("5c 5d 5h Ac Ad Jc Jd"));
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|fh| fh.len() == FULL_HOUSE_LEN));
    }

    #[test_log::test]
    fn split_returns_both_parts() {
        let parts = split_full_house(&hand("7c Kd 7h Ks 7s")).unwrap();
        assert_eq!(parts.triple().to_string(), "7c 7h 7s");
        assert_eq!(parts.pair().to_string(), "Kd Ks");
        assert_eq!(parts.rejoin().to_string(), "7c 7h 7s Kd Ks");
        assert_eq!(parts.triple_rank(), Rank::Seven);
        assert_eq!(parts.pair_rank(), Rank::King);
    }

    #[test_log::test]
    fn split_rejects_malformed_hands() {
        for bad in ["Kc Kd Kh 7c", "Kc Kd Kh 7c 2d", "Kc Kd Kh Ks 7c", "Kc Kd 7c 7d 2s", "Kc Kd Kh 7c 7d 7h"] {
            let err = split_full_house(&hand(bad)).unwrap_err();
            assert!(matches!(err, EvalError::PreconditionViolation(_)), "{bad}");
        }
    }

    #[test_log::test]
    fn best_requires_a_full_house() {
        let err = best_full_houses(&hand("Ac Kd Qh Js 9c")).unwrap_err();
        assert_eq!(err, EvalError::NoFullHouseAvailable);
    }

    #[test_log::test]
    fn triple_rank_beats_pair_rank() {
        let best = best_full_houses(&hand("Qc Qd Qh Ac Ad Kc Kd Kh 2c 2d")).unwrap();
        assert_eq!(best.len(), 1);
        let parts = split_full_house(&best[0]).unwrap();
        assert_eq!(parts.triple_rank(), Rank::King);
        assert_eq!(parts.pair_rank(), Rank::Ace);
    }

    #[test_log::test]
    fn triple_rank_first_differs_from_longer_stronger() {
        let kings_over_twos = hand("Kc Kd Kh 2c 2d");
        let queens_over_aces = hand("Qc Qd Qh Ac Ad");
        let naive = all_best(vec![kings_over_twos.clone(), queens_over_aces.clone()]);
        assert_eq!(naive, vec![queens_over_aces]);

        let best = best_full_houses(&hand("Kc Kd Kh 2c 2d Qc Qd Qh")).unwrap();
        let parts = split_full_house(&best[0]).unwrap();
        assert_eq!(parts.triple_rank(), Rank::King);
    }

    #[test_log::test]
    fn equal_triples_compare_pairs() {
        let best = best_full_houses(&hand("8c 8d 8h 3c 3d Jc Jd")).unwrap();
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].to_string(), "8c 8d 8h Jc Jd");
    }

    #[test_log::test]
    fn repeated_cards_never_pair_a_rank_with_itself() {
        assert!(find_full_houses(&hand("Kc Kc Kd Kh Ks")).is_empty());

        let found = find_full_houses(&hand("Kc Kc Kd Kh Ks 7c 7d"));
        assert_eq!(found, vec![hand("Kc Kc Kd 7c 7d")]);
        assert_eq!(best_full_houses(&hand("Kc Kc Kd Kh Ks 7c 7d")), Ok(found));
    }

    #[test_log::test]
    fn equal_ranked_candidates_are_all_kept() {
        let candidates = vec![
            hand("Kc Kd Kh 7c 7d"),
            hand("9c 9d 9h Ac Ad"),
            hand("Ks Kh Kd 7h 7s"),
            hand("Kc Kd Kh 2c 2d"),
        ];
        let best = select_best_full_houses(candidates).unwrap();
        assert_eq!(best, vec![hand("Kc Kd Kh 7c 7d"), hand("Ks Kh Kd 7h 7s")]);
    }

    #[test_log::test]
    fn selecting_from_no_candidates_fails() {
        assert_eq!(select_best_full_houses(Vec::new()), Err(EvalError::NoFullHouseAvailable));
    }

    #[test_log::test]
    fn malformed_candidate_is_reported() {
        let err = select_best_full_houses(vec![hand("Kc Kd Kh 7c 7d"), hand("Kc Kd Kh Ks 7c")]);
        assert!(matches!(err, Err(EvalError::PreconditionViolation(_))));
    }
}
