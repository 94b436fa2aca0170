use anyhow::Context;
use chess_cards::{
    api::{ChessComClient, FixtureSource, PlayerSource},
    cards::{self, Dashboard},
    config::Settings,
    models::{CardSpec, GameMode},
    styling::TIER_STYLES,
};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod tui_main;

#[derive(Parser)]
#[clap(name = "chess_cards")]
#[clap(about = "Flip cards for chess.com player ratings", long_about = None)]
struct Cli {
    /// Use built-in sample players instead of the chess.com API
    #[clap(long, global = true)]
    offline: bool,

    /// Configuration file layered over the defaults
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive card deck (default)
    Tui,

    /// Load every configured card and print it
    Cards,

    /// Load and print a single player's card
    Card {
        /// chess.com username
        #[clap(short, long)]
        name: String,

        /// Game mode (chess_blitz, chess_bullet, chess_rapid, chess_daily, chess960_daily)
        #[clap(short, long, default_value = "chess_blitz")]
        game: GameMode,
    },

    /// Print the rating tiers and their colors
    Tiers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging is not up yet; a bad config aborts with the error on stderr.
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?,
        None => Settings::new().context("Invalid configuration")?,
    };

    let command = cli.command.unwrap_or(Commands::Tui);
    match command {
        Commands::Tui => disable_logging_output(),
        _ => init_logging(&settings.app.log_level),
    }

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    let source: Arc<dyn PlayerSource> = if cli.offline {
        info!("Using offline sample players");
        Arc::new(FixtureSource::demo())
    } else {
        Arc::new(ChessComClient::new(&settings.api)?)
    };

    match command {
        Commands::Tui => {
            tui_main::run_tui(settings, source).await?;
        }

        Commands::Cards => {
            print_cards(source.as_ref(), &settings.cards, &settings).await;
        }

        Commands::Card { name, game } => {
            print_cards(source.as_ref(), &[CardSpec::new(name, game)], &settings).await;
        }

        Commands::Tiers => {
            println!("\n=== Rating Tiers ===");
            for style in TIER_STYLES.iter() {
                let band = match style.above {
                    Some(floor) => format!("> {}", floor),
                    None => "otherwise".to_string(),
                };
                println!("{:<10} {:<10} accent {}  shadow {}", style.label, band, style.accent, style.shadow);
                println!("           {}", style.gradient.split_whitespace().collect::<Vec<_>>().join(" "));
            }
        }
    }

    Ok(())
}

async fn print_cards(source: &dyn PlayerSource, specs: &[CardSpec], settings: &Settings) {
    let board = Mutex::new(Dashboard::new(specs));
    cards::load_all(source, specs, &settings.card, &board).await;
    let board = board.into_inner();

    println!("\n=== Who's Hot? ===");
    for (index, card) in board.cards().iter().enumerate() {
        let marker = if board.aggregator().is_ready(index) { "✅" } else { "❌" };
        println!(
            "{} {:<24} {:<10} {:<9} {:>5}  +{}",
            marker,
            card.display_name(),
            card.tier_label(),
            card.game.label(),
            card.rating,
            card.plus,
        );
    }

    let aggregator = board.aggregator();
    if aggregator.all_ready() {
        println!("\nAll {} cards ready.", aggregator.expected());
    } else {
        println!("\n{}/{} cards ready.", aggregator.ready_count(), aggregator.expected());
    }
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn disable_logging_output() {
    // Redirect tracing output to a null writer to prevent screen corruption
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

    let null_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::sink)
        .with_filter(tracing_subscriber::filter::LevelFilter::OFF);

    let _ = tracing_subscriber::registry()
        .with(null_layer)
        .try_init();
}
