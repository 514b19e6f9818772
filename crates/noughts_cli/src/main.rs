//! Noughts: console tic-tac-toe between two players at one keyboard.

use anyhow::Result;
use clap::Parser;
use noughts_cli::{Cli, Console, GameLoop, HumanPlayer, Player};
use noughts_core::Mark;
use tokio::io::{Stdin, Stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so frames on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let console = Console::stdio().clear_screen(!cli.no_clear);
    let players: [Box<dyn Player<Stdin, Stdout>>; 2] = [
        Box::new(HumanPlayer::new("P1", Mark::O)),
        Box::new(HumanPlayer::new("P2", Mark::X)),
    ];

    let mut session = GameLoop::new(console, players);
    let outcome = session.run().await?;
    info!(?outcome, "session finished");

    Ok(())
}
