use french_deck::cards::{Card, Rank, Suit};
use french_deck::deck::Deck;
use french_deck::error::SequenceError;
use french_deck::ranking::{rank_weight, RankingKey, SuitValues};
use french_deck::sequence::{self, Selection, Sequence};
use french_deck::slice::Slice;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn ends_of_the_deck() {
    let deck = Deck::new();
    assert_eq!(deck.get(0), Ok(&card(Rank::Two, Suit::Spades)));
    assert_eq!(deck.get(51), Ok(&card(Rank::Ace, Suit::Hearts)));
}

#[test]
fn first_three_cards() {
    let deck = Deck::new();
    assert_eq!(
        deck.get_slice(&Slice::from(0..3)),
        Ok(vec![
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Spades),
            card(Rank::Four, Suit::Spades),
        ])
    );
}

#[test]
fn every_thirteenth_from_twelve_is_the_aces() {
    let deck = Deck::new();
    assert_eq!(
        deck.get_slice(&Slice::new(Some(12), None, Some(13))),
        Ok(vec![
            card(Rank::Ace, Suit::Spades),
            card(Rank::Ace, Suit::Diamonds),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Ace, Suit::Hearts),
        ])
    );
}

#[test]
fn reverse_mirrors_forward() {
    let deck = Deck::new();
    let forward: Vec<&Card> = sequence::iter(&deck).collect();
    let backward: Vec<&Card> = sequence::reversed(&deck).collect();
    assert_eq!(forward.len(), 52);
    assert_eq!(backward.len(), 52);
    for i in 0..52 {
        assert_eq!(backward[i], forward[51 - i]);
    }
}

#[test]
fn iteration_restarts() {
    let deck = Deck::new();
    let a: Vec<Card> = sequence::iter(&deck).copied().collect();
    let b: Vec<Card> = sequence::iter(&deck).copied().collect();
    assert_eq!(a, b);
}

#[test]
fn sorted_by_spades_high() {
    let deck = Deck::new();
    let key = RankingKey::spades_high();
    let sorted = sequence::sorted_by_key(&deck, |c| key.weight(c));
    assert_eq!(sorted.len(), 52);
    assert!(sorted.windows(2).all(|w| key.weight(&w[0]) <= key.weight(&w[1])));
    assert_eq!(sorted[0], card(Rank::Two, Suit::Clubs));
    assert_eq!(sorted[1], card(Rank::Two, Suit::Diamonds));
    assert_eq!(sorted[2], card(Rank::Two, Suit::Hearts));
    assert_eq!(sorted[3], card(Rank::Two, Suit::Spades));
    assert_eq!(sorted[51], card(Rank::Ace, Suit::Spades));
}

#[test]
fn sorting_with_the_free_function_matches() {
    let deck = Deck::new();
    let values = SuitValues::SPADES_HIGH;
    let by_fn = sequence::sorted_by_key(&deck, |c| rank_weight(c, &Deck::RANKS, &values).ok());
    let key = RankingKey::spades_high();
    let by_key = sequence::sorted_by_key(&deck, |c| key.weight(c));
    assert_eq!(by_fn, by_key);
}

#[test]
fn membership_is_a_scan() {
    let deck = Deck::new();
    assert!(sequence::contains(&deck, &card(Rank::Queen, Suit::Hearts)));
    assert!(sequence::contains(&deck, &("Q", "hearts")));
    assert!(!sequence::contains(&deck, &("7", "beasts")));
    for rank in Rank::ALL {
        assert!(!sequence::contains(&deck, &(rank.symbol(), "beasts")));
    }
}

#[test]
fn repeated_access_is_stable() {
    let deck = Deck::new();
    let aces = Slice::from(12..).step(13);
    assert_eq!(deck.get(17), deck.get(17));
    assert_eq!(deck.get_slice(&aces), deck.get_slice(&aces));
}

#[test]
fn out_of_range_positions() {
    let deck = Deck::new();
    assert_eq!(deck.get(52), Err(SequenceError::IndexOutOfRange { position: 52, size: 52 }));
    assert_eq!(deck.get(-53), Err(SequenceError::IndexOutOfRange { position: -53, size: 52 }));
    assert_eq!(deck.get_slice(&Slice::from(100..200)), Ok(vec![]));
    assert_eq!(deck.get_slice(&Slice::full().step(0)), Err(SequenceError::ZeroStep));
}

#[test]
fn select_takes_index_or_range() {
    let deck = Deck::new();
    assert_eq!(deck.select(-1isize), Ok(Selection::One(&card(Rank::Ace, Suit::Hearts))));
    match deck.select(Slice::full().step(-1)) {
        Ok(Selection::Many(cards)) => {
            assert_eq!(cards.len(), 52);
            assert_eq!(cards[0], card(Rank::Ace, Suit::Hearts));
        }
        other => panic!("expected many cards, got {other:?}"),
    }
}

#[test]
fn seeded_choice_is_reproducible_and_a_member() {
    let deck = Deck::new();
    let a = *sequence::choice(&deck, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    let b = *sequence::choice(&deck, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
    assert!(sequence::contains(&deck, &a));
}

#[test]
fn choice_from_an_empty_slice_fails() {
    let deck = Deck::new();
    let none = deck.get_slice(&Slice::from(60..)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(sequence::choice(&none, &mut rng), Err(SequenceError::Empty));
}
