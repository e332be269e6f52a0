//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::Parser;
use std::path::PathBuf;

/// pmxt-bundle - server artifact bundler
///
/// Stage the built pmxt-core server bundle into the Python SDK package.
#[derive(Parser, Debug)]
#[command(
    name = "pmxt-bundle",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bundle pmxt-core server artifacts into the pmxt Python package",
    long_about = "pmxt-bundle copies the built server bundle and bin entry points from the \
                  pmxt-core package into the Python SDK's pmxt/_server directory, so the SDK \
                  can be distributed standalone via pip without a Node.js toolchain.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  pmxt-bundle\n    \
                  pmxt-bundle --sdk-dir sdks/python\n    \
                  pmxt-bundle --core-dir ../core --quiet\n\n\
                  \x1b[1m\x1b[32mLayout:\x1b[0m\n    \
                  reads   <core-dir>/dist/server/bundled.js and <core-dir>/bin/\n    \
                  writes  <sdk-dir>/pmxt/_server/"
)]
pub struct Cli {
    /// SDK directory containing the pmxt package (defaults to current directory)
    #[arg(long, short = 'C', value_name = "PATH")]
    pub sdk_dir: Option<PathBuf>,

    /// Core package directory (defaults to ../../core relative to the SDK directory)
    #[arg(long, value_name = "PATH")]
    pub core_dir: Option<PathBuf>,

    /// Suppress informational output and the progress bar
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print each file copied while mirroring bin/
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
