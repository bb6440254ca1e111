use clap::Parser;
use log::info;
use poker_hand::deck::Deck;
use poker_hand::hand::{Hand, HAND_SIZE};
use std::error::Error;

/// Print a deck, shuffle it, deal five-card hands and classify them.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Seed for a reproducible shuffle; random when omitted.
    #[arg(long, short)]
    seed: Option<u64>,
    /// Number of hands to deal.
    #[arg(long = "hands", short = 'n', default_value_t = 1)]
    hands: usize,
    /// Skip printing the deck before and after shuffling.
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let mut deck = Deck::new();
    if !cli.quiet {
        println!("Initial deck: {deck}");
    }

    match cli.seed {
        Some(seed) => {
            info!("shuffling with seed {seed}");
            deck.shuffle_seeded(seed);
        }
        None => deck.shuffle(&mut rand::rng()),
    }
    if !cli.quiet {
        println!("Shuffled deck: {deck}");
    }

    for i in 1..=cli.hands {
        let cards = deck.deal(HAND_SIZE)?;
        let hand = Hand::try_new(&cards)?;
        println!("Hand {i}: {hand} => {}", hand.classify());
    }
    info!("{} cards left in the deck", deck.len());
    Ok(())
}
