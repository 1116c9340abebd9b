use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Printed symbol: "2".."10", "J", "Q", "K", "A".
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let r = match upper.as_str() {
            "10" | "T" => Rank::Ten,
            other => Rank::ALL
                .into_iter()
                .find(|r| r.symbol() == other)
                .ok_or_else(|| RankParseError::Invalid(s.to_string()))?,
        };
        Ok(r)
    }
}

/// The four French suits, declared in deck construction order.
///
/// The derived ordering follows declaration order and carries no notion of
/// card strength; see [`crate::ranking::SuitValues`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    /// Position of the suit in [`Suit::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Hearts => "hearts",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        let lower = t.to_ascii_lowercase();
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == lower)
            .ok_or_else(|| SuitParseError::Invalid(s.to_string()))
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            's' => Ok(Suit::Spades),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            'h' => Ok(Suit::Hearts),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: rank + suit. Two cards with the same fields are equal.
///
/// ```
/// use french_deck::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Queen, Suit::Hearts);
/// assert_eq!(card.to_string(), "Card(rank='Q', suit='hearts')");
/// assert!(card == ("Q", "hearts"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card(rank='{}', suit='{}')", self.rank, self.suit)
    }
}

/// Loose comparison against a `(rank symbol, suit name)` pair.
///
/// Lets needles that are not valid cards, such as `("7", "beasts")`, take part
/// in membership scans; they simply never compare equal.
impl PartialEq<(&str, &str)> for Card {
    fn eq(&self, other: &(&str, &str)) -> bool {
        self.rank.symbol() == other.0 && self.suit.name() == other.1
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

/// Accepts "Q of hearts", "Q hearts" and the compact "Qh" / "10h".
impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace().filter(|w| !w.eq_ignore_ascii_case("of"));
        match (words.next(), words.next(), words.next()) {
            (Some(rank), Some(suit), None) => {
                Ok(Card::new(Rank::from_str(rank)?, Suit::from_str(suit)?))
            }
            (Some(compact), None, None) => {
                // suit is the last char, rank is everything before it
                let (split, suit_ch) = compact
                    .char_indices()
                    .last()
                    .ok_or_else(|| CardParseError::Invalid(s.to_string()))?;
                if split == 0 {
                    return Err(CardParseError::Invalid(s.to_string()));
                }
                let rank = Rank::from_str(&compact[..split])?;
                let suit = Suit::try_from(suit_ch)?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(CardParseError::Invalid(s.to_string())),
        }
    }
}

/// Parse multiple compact cards separated by whitespace or commas.
///
/// ```
/// use french_deck::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
