//! Walks a freshly built deck through every generic sequence algorithm and
//! prints the results.

use clap::Parser;
use french_deck::cards::Card;
use french_deck::deck::Deck;
use french_deck::ranking::{RankingKey, SuitValues};
use french_deck::sequence::{self, Sequence};
use french_deck::slice::Slice;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{fmt, EnvFilter};

/// Demonstrates a deck driven only by its size and positional access.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the random card pick; omit for a fresh pick each run.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_logging() {
    // RUST_LOG controls the level, default is warn
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let deck = Deck::new();

    let key = RankingKey::try_new(&Deck::RANKS, SuitValues::SPADES_HIGH)?;
    for card in sequence::sorted_by_key(&deck, |card| key.weight(card)) {
        println!("{card}");
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().next_u64());
    tracing::info!(seed, "seeding random pick");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    println!("{}", sequence::choice(&deck, &mut rng)?);

    println!("{}", format_cards(&deck.get_slice(&Slice::from(..3))?));
    println!("{}", format_cards(&deck.get_slice(&Slice::from(12..).step(13))?));

    for card in sequence::reversed(&deck) {
        println!("{card}");
    }

    println!("{}", sequence::contains(&deck, &("Q", "hearts")));
    println!("{}", sequence::contains(&deck, &("7", "beasts")));
    Ok(())
}

fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(Card::to_string).collect();
    format!("[{}]", inner.join(", "))
}
