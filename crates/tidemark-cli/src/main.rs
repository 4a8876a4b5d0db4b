//! Tidemark - a terminal chat scaffold with scroll-position markers
//!
//! A message list, a text input, and a marker feature for tagging scroll
//! positions in a long conversation and jumping between them. Replies are
//! mock strings after a fixed delay; there is no AI integration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tidemark_core::{paths, Config};

mod tui;

/// Tidemark - chat with scroll markers
#[derive(Parser)]
#[command(name = "tidemark")]
#[command(about = "A terminal chat scaffold with scroll-position markers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Config file path (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a chat session
    Chat,

    /// List available themes
    Themes,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Restore the terminal before any panic output is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Log to a file, never stdout/stderr, which would corrupt the TUI
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = std::fs::File::create(log_dir.join("tidemark.log"))
        .unwrap_or_else(|_| std::fs::File::create(null_device).unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(paths::config_file);
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    match cli.command {
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for (name, theme) in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(Commands::Chat) | None => {
            let mut app = tui::App::new(&config, cli.theme.as_deref());
            app.run().await?;
        }
    }

    Ok(())
}
