//! Command line arguments.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "announcer")]
#[command(about = "Broadcast an announcement to every newsletter subscriber")]
pub struct Cli {
    /// Message to broadcast. Overrides NEWSLETTER_MESSAGE.
    #[arg(short, long)]
    pub message: Option<String>,

    /// Broadcast to an empty subscriber list
    #[arg(long)]
    pub empty: bool,
}
