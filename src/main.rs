mod cli;
mod config;
mod demo;
mod error;
mod room;

use std::error::Error;
use std::io;
use crate::cli::{Cli, generate_example_config};
use crate::config::DemoConfig;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;
use clap::Parser;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Handle config generation
    if cli.generate_config {
        let example_config = generate_example_config();
        println!("{}", example_config);
        return Ok(());
    }

    // Initialize logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    // stdout is reserved for the demo output
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_env_filter(format!("chatroom={}", log_level.as_str().to_lowercase()))
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => {
            let config = DemoConfig::load(path).map_err(|e| {
                tracing::error!("Failed to load configuration from {:?}: {}", path, e);
                e
            })?;
            info!("Configuration loaded from {:?}", path);
            config
        }
        None => {
            debug!("No configuration given, using sample members");
            DemoConfig::default()
        }
    };

    let chat_room = config.chat_room();
    info!("Chat room built with {} members", chat_room.len());
    let stdout = io::stdout();
    demo::run(&chat_room, &mut stdout.lock()).map_err(|e| {
        tracing::error!("Demo failed: {}", e);
        e
    })?;

    Ok(())
}
