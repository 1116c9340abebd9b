//! Card strength, kept apart from the deck.
//!
//! A card's weight is its position in a rank order times the number of
//! suits, plus its suit's value. The rank order and the suit values are
//! always passed in explicitly.

use crate::cards::{Card, Rank, Suit};
use crate::error::RankingError;

/// Weight of each suit, looked up by [`Suit::index`].
///
/// ```
/// use french_deck::cards::Suit;
/// use french_deck::ranking::SuitValues;
///
/// let values = SuitValues::SPADES_HIGH;
/// assert_eq!(values.get(Suit::Spades), 3);
/// assert_eq!(values.get(Suit::Clubs), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuitValues([u8; 4]);

impl SuitValues {
    /// spades=3, hearts=2, diamonds=1, clubs=0.
    pub const SPADES_HIGH: SuitValues = SuitValues::new(3, 1, 0, 2);

    /// Values given in [`Suit::ALL`] order: spades, diamonds, clubs, hearts.
    pub const fn new(spades: u8, diamonds: u8, clubs: u8, hearts: u8) -> Self {
        Self([spades, diamonds, clubs, hearts])
    }

    pub const fn get(&self, suit: Suit) -> u8 {
        self.0[suit.index()]
    }

    /// Copy with one suit's value replaced.
    pub fn with(mut self, suit: Suit, value: u8) -> Self {
        self.0[suit.index()] = value;
        self
    }

    /// Number of suits covered.
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SuitValues {
    fn default() -> Self {
        Self::SPADES_HIGH
    }
}

/// Weight of `card` under `ranks` and `suit_values`: rank first, suit second.
///
/// ```
/// use french_deck::cards::{Card, Rank, Suit};
/// use french_deck::deck::Deck;
/// use french_deck::ranking::{rank_weight, SuitValues};
///
/// let lowest = Card::new(Rank::Two, Suit::Clubs);
/// let highest = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(rank_weight(&lowest, &Deck::RANKS, &SuitValues::SPADES_HIGH), Ok(0));
/// assert_eq!(rank_weight(&highest, &Deck::RANKS, &SuitValues::SPADES_HIGH), Ok(51));
/// ```
pub fn rank_weight(card: &Card, ranks: &[Rank], suit_values: &SuitValues) -> Result<u32, RankingError> {
    let position = ranks
        .iter()
        .position(|&r| r == card.rank())
        .ok_or(RankingError::UnknownRank(card.rank()))?;
    Ok(position as u32 * suit_values.len() as u32 + u32::from(suit_values.get(card.suit())))
}

/// A rank order and suit values checked to form a total order over all 52
/// cards, so weights can be looked up without failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingKey {
    // indexed by Rank::value() - 2
    rank_positions: [u8; 13],
    suit_values: SuitValues,
}

impl RankingKey {
    /// Rank order must list every rank exactly once; suit values must be
    /// distinct and below the number of suits.
    pub fn try_new(ranks: &[Rank], suit_values: SuitValues) -> Result<Self, RankingError> {
        let mut rank_positions = [u8::MAX; 13];
        for (position, &rank) in ranks.iter().enumerate() {
            let slot = &mut rank_positions[rank_slot(rank)];
            if *slot != u8::MAX {
                return Err(RankingError::DuplicateRank(rank));
            }
            *slot = position as u8;
        }
        if let Some(&missing) = Rank::ALL.iter().find(|&&r| rank_positions[rank_slot(r)] == u8::MAX) {
            return Err(RankingError::MissingRank(missing));
        }

        let mut seen = [false; 4];
        for suit in Suit::ALL {
            let value = suit_values.get(suit);
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(RankingError::SuitValueOutOfRange { value, limit: suit_values.len() })?;
            if *slot {
                return Err(RankingError::DuplicateSuitValue(value));
            }
            *slot = true;
        }

        Ok(Self { rank_positions, suit_values })
    }

    /// Standard rank order with [`SuitValues::SPADES_HIGH`].
    pub fn spades_high() -> Self {
        let mut rank_positions = [0; 13];
        for (position, rank) in Rank::ALL.into_iter().enumerate() {
            rank_positions[rank_slot(rank)] = position as u8;
        }
        Self { rank_positions, suit_values: SuitValues::SPADES_HIGH }
    }

    pub fn weight(&self, card: &Card) -> u32 {
        u32::from(self.rank_positions[rank_slot(card.rank())]) * self.suit_values.len() as u32
            + u32::from(self.suit_values.get(card.suit()))
    }
}

impl Default for RankingKey {
    fn default() -> Self {
        Self::spades_high()
    }
}

fn rank_slot(rank: Rank) -> usize {
    usize::from(rank.value() - Rank::Two.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[test]
    fn spades_high_values() {
        let v = SuitValues::SPADES_HIGH;
        assert_eq!(v.get(Suit::Spades), 3);
        assert_eq!(v.get(Suit::Hearts), 2);
        assert_eq!(v.get(Suit::Diamonds), 1);
        assert_eq!(v.get(Suit::Clubs), 0);
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn weight_is_rank_major() {
        let v = SuitValues::SPADES_HIGH;
        let two_spades = Card::new(Rank::Two, Suit::Spades);
        let three_clubs = Card::new(Rank::Three, Suit::Clubs);
        assert_eq!(rank_weight(&two_spades, &Deck::RANKS, &v), Ok(3));
        assert_eq!(rank_weight(&three_clubs, &Deck::RANKS, &v), Ok(4));
    }

    #[test]
    fn unknown_rank_is_an_error() {
        let short = [Rank::Two, Rank::Three];
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(
            rank_weight(&ace, &short, &SuitValues::SPADES_HIGH),
            Err(RankingError::UnknownRank(Rank::Ace))
        );
    }

    #[test]
    fn key_agrees_with_free_function() {
        let key = RankingKey::spades_high();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(rank, suit);
                assert_eq!(Ok(key.weight(&card)), rank_weight(&card, &Deck::RANKS, &SuitValues::SPADES_HIGH));
            }
        }
        assert_eq!(RankingKey::try_new(&Deck::RANKS, SuitValues::SPADES_HIGH), Ok(key));
    }

    #[test]
    fn custom_rank_order_is_honoured() {
        let mut ace_low = Rank::ALL;
        ace_low.rotate_right(1);
        let key = RankingKey::try_new(&ace_low, SuitValues::SPADES_HIGH).unwrap();
        assert_eq!(key.weight(&Card::new(Rank::Ace, Suit::Clubs)), 0);
        assert_eq!(key.weight(&Card::new(Rank::King, Suit::Spades)), 51);
    }

    #[test]
    fn invalid_configurations_are_rejected() {
        let v = SuitValues::SPADES_HIGH;
        assert_eq!(
            RankingKey::try_new(&Rank::ALL[..12], v),
            Err(RankingError::MissingRank(Rank::Ace))
        );
        let mut dup = Rank::ALL.to_vec();
        dup.push(Rank::Two);
        assert_eq!(RankingKey::try_new(&dup, v), Err(RankingError::DuplicateRank(Rank::Two)));
        assert_eq!(
            RankingKey::try_new(&Rank::ALL, v.with(Suit::Clubs, 3)),
            Err(RankingError::DuplicateSuitValue(3))
        );
        assert_eq!(
            RankingKey::try_new(&Rank::ALL, v.with(Suit::Hearts, 9)),
            Err(RankingError::SuitValueOutOfRange { value: 9, limit: 4 })
        );
    }
}
