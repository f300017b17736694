//! hubvoice demo binary: drives the session core from typed console input.

mod config;
mod console;
mod event_loop;
mod input;
mod writer;

use anyhow::Result;
use clap::Parser;

use config::HubConfig;

fn main() -> Result<()> {
    let config = HubConfig::parse();
    if let Some(path) = hubvoice::init_tracing(&config.app) {
        tracing::debug!("session trace sink at {}", path.display());
    }
    event_loop::run(&config)
}
