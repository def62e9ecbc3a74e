mod card;
mod command;
mod config;
mod engine;
mod error;
mod face;
mod game;
mod renderer;
mod source;
mod table;
mod tui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::{Args, Ui};
use game::Game;
use renderer::CliRenderer;
use table::Table;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the table on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let source = args.card_source()?;
    let table = Table::new(args.suit.into());
    tracing::debug!(?args, "starting");

    match args.ui {
        Ui::Console => {
            println!(
                r#"
┌─────────────────────────────────────────┐
│          High Card (CLI Edition)        │
│   Type 'help' or '?' for commands.      │
└─────────────────────────────────────────┘
"#
            );
            let renderer = if args.no_color {
                CliRenderer::plain()
            } else {
                CliRenderer::new()
            };
            let mut game = Game::new(table, source, renderer);
            game.run()?;
            tracing::info!(score = %game.table().score(), "bye");
        }
        Ui::Tui => {
            let score = tui::run(table, source)?;
            tracing::info!(%score, "bye");
            println!("Thanks for playing. Final score: {}", score);
        }
    }

    Ok(())
}
