//! Opti-Transit dashboard - terminal shell for the transit management sections

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use opti_transit_dashboard::{App, Args, logging::init_logging};
use signal_hook::consts::SIGINT;
use signal_hook::flag;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::{error, info, warn};

/// Main entry point for the dashboard
fn main() -> Result<()> {
    let config = Args::parse().resolve()?;

    // One log directory per run
    let session_id = Utc::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let log_guard = init_logging(&config, &session_id)?;

    info!(%session_id, "Starting Opti-Transit dashboard");

    // Create shutdown flag for signal handling
    let shutdown_flag = Arc::new(AtomicBool::new(false));

    if let Err(e) = flag::register(SIGINT, Arc::clone(&shutdown_flag)) {
        warn!("Failed to register SIGINT handler: {}", e);
    }

    let mut app = App::new(&config);
    app.set_shutdown_flag(shutdown_flag.clone());

    // Create a custom panic hook that cleans up the terminal
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::execute!(
            std::io::stderr(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        let _ = crossterm::terminal::disable_raw_mode();

        default_panic(panic_info);
    }));

    if let Err(e) = app.run() {
        // The app handles its own terminal cleanup, but ensure we're in a good state
        let _ = crossterm::terminal::disable_raw_mode();
        error!(%e, "Application error");
        eprintln!("Application error: {e}");

        // exit skips destructors, so flush the log writer first
        drop(log_guard);
        std::process::exit(1);
    }

    if shutdown_flag.load(Ordering::Relaxed) {
        info!("Shutdown via signal complete");
    }

    info!("Opti-Transit dashboard exiting normally");
    drop(log_guard);
    Ok(())
}
