//! french-deck: a 52-card deck that behaves like a sequence
//!
//! Goals:
//! - The deck only knows its size and what sits at each position
//! - Iteration, slicing, random choice, membership and sorting are generic
//!   algorithms over the [`sequence::Sequence`] trait
//! - Card strength lives outside the deck, in [`ranking`]
//! - No panics for bad positions; use `Result` for recoverable errors
//!
//! ## Quick start
//! ```
//! use french_deck::deck::Deck;
//! use french_deck::ranking::RankingKey;
//! use french_deck::sequence::{self, Sequence};
//! use french_deck::slice::Slice;
//!
//! let deck = Deck::new();
//! let aces = deck.get_slice(&Slice::from(12..).step(13)).unwrap();
//! assert!(aces.iter().all(|c| c.rank().symbol() == "A"));
//!
//! let key = RankingKey::spades_high();
//! let sorted = sequence::sorted_by_key(&deck, |c| key.weight(c));
//! assert_eq!(sorted[0].to_string(), "Card(rank='2', suit='clubs')");
//! assert!(!sequence::contains(&deck, &("7", "beasts")));
//! ```
//!
//! ## Demo
//! Run the demonstration driver with:
//! ```sh
//! cargo run --bin french-deck -- --seed 7
//! ```

pub mod cards;
pub mod deck;
pub mod error;
pub mod ranking;
pub mod sequence;
pub mod slice;
