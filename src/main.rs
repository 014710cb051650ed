//! Wellness Tracker - desktop entry point
//!
//! Initializes logging and the toolkit, then opens the main window and runs
//! until it is closed.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wellness_tracker::error::ShellError;
use wellness_tracker::ui;

/// Wellness Tracker - log exercise, nutrition and sleep
#[derive(Parser, Debug)]
#[command(name = "wellness-tracker")]
#[command(about = "Wellness Tracker desktop window")]
#[command(version)]
struct Args {}

fn main() -> Result<()> {
    let startup_time = std::time::Instant::now();

    let _args = Args::parse();

    // Silent by default; RUST_LOG=info shows lifecycle events
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();

    info!("Wellness Tracker v{}", env!("CARGO_PKG_VERSION"));

    ui::app::check_display()?;

    gtk::init().map_err(|e| ShellError::toolkit_init("GTK4", e))?;
    adw::init().map_err(|e| ShellError::toolkit_init("Libadwaita", e))?;

    info!("GTK4/Libadwaita initialized in {:?}", startup_time.elapsed());

    let app = ui::app::WellnessApplication::new();

    // Returns once the main window has been closed
    let exit_code = app.run();

    std::process::exit(exit_code.into());
}
