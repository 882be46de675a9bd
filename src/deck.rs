use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck. Cards are dealt from the top (the end of the vector).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal up to `n` cards as a hand; fewer if the deck runs out.
    ///
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(13);
    /// let hand = deck.deal(13);
    /// assert_eq!(hand.len(), 13);
    /// assert_eq!(deck.len(), 39);
    /// ```
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n).map_while(|_| self.draw()).collect()
    }
}
