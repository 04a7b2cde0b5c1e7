//! Newsletter Announcer - Entry Point
//!
//! Builds the mail backends, subscribes the demo audience and broadcasts one
//! announcement.

use clap::Parser;
use newsletter_announcer::cli::Cli;
use newsletter_announcer::config::{Config, Environment};
use newsletter_announcer::telemetry::{init_tracing, install_color_eyre};

fn main() -> eyre::Result<()> {
    install_color_eyre();

    init_tracing(&Environment::from_env());
    let config = Config::from_env();

    let cli = Cli::parse();
    newsletter_announcer::run(&cli, &config)
}
