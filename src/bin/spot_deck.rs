// CLI for generating and checking decks

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use spot_deck::{generate_design, Deck, DeckConfig, SeedValue};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spot-deck")]
#[command(about = "Generate spot-the-match symbol decks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a deck and print it
    Generate {
        /// Prime order q (q + 1 symbols per card)
        #[arg(short, long)]
        order: Option<u32>,

        /// Shuffle seed, integer or text
        #[arg(short, long, allow_hyphen_values = true)]
        seed: Option<SeedValue>,

        /// Keep only the first N cards
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print cards in construction order
        #[arg(long)]
        no_shuffle: bool,

        /// Apply a seeded permutation to symbol ids
        #[arg(long)]
        relabel: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// JSON deck config; flags override its fields
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate the design for an order and run the full pairwise check
    Check {
        /// Prime order q
        #[arg(short, long)]
        order: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<DeckConfig> {
    let Some(path) = path else {
        return Ok(DeckConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}

fn print_text(deck: &Deck) {
    println!(
        "order {}: {} symbols, {} per card, {} cards (seed {})",
        deck.order().get(),
        deck.symbol_count(),
        deck.symbols_per_card(),
        deck.len(),
        deck.seed()
    );
    for (i, card) in deck.cards().iter().enumerate() {
        let symbols: Vec<String> = card.iter().map(|s| s.0.to_string()).collect();
        println!("{i:>4}: {}", symbols.join(" "));
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            order,
            seed,
            limit,
            no_shuffle,
            relabel,
            format,
            config,
        } => {
            let mut deck_config = load_config(config.as_ref())?;
            if let Some(order) = order {
                deck_config.order = order;
            }
            if let Some(seed) = seed {
                deck_config.seed = seed;
            }
            if let Some(limit) = limit {
                deck_config.card_limit = Some(limit);
            }
            if no_shuffle {
                deck_config = deck_config.without_shuffle();
            }
            if relabel {
                deck_config = deck_config.with_relabelling();
            }

            let deck = Deck::build(&deck_config)?;
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&deck)?),
                Format::Text => print_text(&deck),
            }
        }
        Commands::Check { order } => {
            let design = generate_design(order)?;
            design.verify()?;
            println!(
                "order {order}: {} cards of {} symbols, every pair shares exactly one",
                design.len(),
                design.symbols_per_card()
            );
        }
    }

    Ok(())
}
