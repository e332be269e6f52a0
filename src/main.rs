//! pmxt-bundle - server artifact bundler for the pmxt Python SDK
//!
//! Copies the pre-built pmxt-core server bundle and its bin entry points into
//! the Python package tree so that `pip install pmxt` works standalone,
//! without a separate Node.js toolchain on the user's machine.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod error;
mod layout;
mod operations;
mod progress;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::bundle::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
