use crate::cards::{parse_cards, Card, Rank};
use crate::evaluator::Strength;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// An ordered collection of cards.
///
/// Order is kept for construction and display, but comparisons treat a hand as
/// a multiset. `-` removes cards, `+` concatenates; neither mutates its inputs.
///
/// ```
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "Ks Kh 7c 7d 7h".parse().unwrap();
/// let sevens: Hand = "7c 7d 7h".parse().unwrap();
/// let kings = &hand - &sevens;
/// assert_eq!(kings.to_string(), "Ks Kh");
/// assert!((&kings + &sevens).same_cards(&hand));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Ranks in card order.
    pub fn ranks(&self) -> Vec<Rank> {
        self.cards.iter().map(|c| c.rank()).collect()
    }

    /// Ranks sorted ascending.
    pub fn sorted_ranks(&self) -> Vec<Rank> {
        let mut ranks = self.ranks();
        ranks.sort_unstable();
        ranks
    }

    /// The first `n` cards (or all of them if the hand is shorter).
    pub fn truncated(&self, n: usize) -> Hand {
        Hand::new(self.cards.iter().take(n).copied().collect())
    }

    /// Multiset equality: same cards, any order.
    pub fn same_cards(&self, other: &Hand) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut a = self.cards.clone();
        let mut b = other.cards.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    /// Key under the longer-stronger order.
    pub fn strength(&self) -> Strength {
        Strength::of(self)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl Sub<&Hand> for &Hand {
    type Output = Hand;

    /// Removes one occurrence per card of `rhs`; cards missing from `self` are ignored.
    fn sub(self, rhs: &Hand) -> Hand {
        let mut cards = self.cards.clone();
        for card in rhs {
            if let Some(pos) = cards.iter().position(|c| c == card) {
                cards.remove(pos);
            }
        }
        Hand::new(cards)
    }
}

impl Sub for Hand {
    type Output = Hand;

    fn sub(self, rhs: Hand) -> Hand {
        &self - &rhs
    }
}

impl Add<&Hand> for &Hand {
    type Output = Hand;

    fn add(self, rhs: &Hand) -> Hand {
        self.cards.iter().chain(rhs.cards.iter()).copied().collect()
    }
}

impl Add for Hand {
    type Output = Hand;

    fn add(mut self, rhs: Hand) -> Hand {
        self.cards.extend(rhs.cards);
        self
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Ok(Hand::new(cards))
    }
}
