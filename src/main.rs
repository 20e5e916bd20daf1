//! Gomoku GUI
//!
//! A graphical hotseat board for two players.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use gomoku::ui::GomokuApp;
use gomoku::{AppConfig, GameState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run(Cli::parse()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let config = cli.load_config()?;
    let size = config.game.board_size;
    let game = GameState::new(size).context("invalid board size")?;

    info!(size, "starting game window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([600.0, 450.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, game)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
