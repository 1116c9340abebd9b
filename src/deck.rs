use crate::cards::{Card, Rank, Suit};
use crate::error::SequenceError;
use crate::sequence::Sequence;

/// A standard 52-card French deck.
///
/// Built once as every rank of every suit, suits in [`Deck::SUITS`] order and
/// ranks in [`Deck::RANKS`] order, and never mutated afterwards. Everything
/// beyond counting and positional access comes from the generic algorithms
/// in [`crate::sequence`].
///
/// ```
/// use french_deck::cards::{Card, Rank, Suit};
/// use french_deck::deck::Deck;
/// use french_deck::sequence::{self, Sequence};
///
/// let deck = Deck::new();
/// assert_eq!(deck.size(), 52);
/// assert_eq!(deck.get(0).unwrap(), &Card::new(Rank::Two, Suit::Spades));
/// assert!(sequence::contains(&deck, &("Q", "hearts")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const SUITS: [Suit; 4] = Suit::ALL;
    pub const RANKS: [Rank; 13] = Rank::ALL;

    pub fn new() -> Self {
        let cards: Vec<Card> = Self::SUITS
            .iter()
            .flat_map(|&suit| Self::RANKS.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        tracing::debug!(cards = cards.len(), "built deck");
        Self { cards }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequence for Deck {
    type Item = Card;

    fn size(&self) -> usize {
        self.cards.len()
    }

    fn get(&self, position: isize) -> Result<&Card, SequenceError> {
        Sequence::get(self.cards.as_slice(), position)
    }
}
