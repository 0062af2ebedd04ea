//! Tic-tac-toe for the terminal or a native window
//!
//! Plays in the terminal by default; `--gui` opens the egui front end.

use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe::config::AppConfig;
use tictactoe::ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "N x N tic-tac-toe for 2 or 3 players", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, default_value = "config/tictactoe.toml")]
    config: PathBuf,

    /// Open the graphical front end
    #[arg(long)]
    gui: bool,

    /// Skip the setup prompts and use the configured board and players
    #[arg(long)]
    defaults: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    info!(board_size = config.board_size, strategy = %config.strategy, "configuration loaded");

    if cli.gui {
        run_gui(config)
    } else {
        let stdin = io::stdin();
        let outcome = tictactoe::cli::run(&config, stdin.lock(), io::stdout(), cli.defaults)?;
        info!(?outcome, "game finished");
        Ok(())
    }
}

fn run_gui(config: AppConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)?))),
    )
    .map_err(|e| anyhow!("GUI failed: {e}"))
}
