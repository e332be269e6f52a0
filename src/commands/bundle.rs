//! Bundle command CLI wrapper
//!
//! Thin wrapper that resolves the monorepo layout from CLI arguments and
//! delegates to `operations::bundle` for the actual work.

use crate::cli::Cli;
use crate::error::Result;
use crate::layout::BundleLayout;
use crate::operations::bundle::{BundleOperation, BundleOptions};

/// Run the bundle command
pub fn run(cli: Cli) -> Result<()> {
    let options = BundleOptions::from(&cli);
    let layout = BundleLayout::resolve(cli.sdk_dir, cli.core_dir)?;

    BundleOperation::new(layout, options).execute()
}
