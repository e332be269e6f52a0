//! Bundle operation
//!
//! Stages the built pmxt-core server artifact and bin entry points into the
//! Python package tree. All source preconditions are checked before the
//! first filesystem mutation, so a missing input never leaves a partial
//! destination behind.

use std::fs;
use std::path::Path;

use console::style;

use crate::cli::Cli;
use crate::common::fs::{copy_dir_recursive, count_files, remove_entry, touch};
use crate::error::{BundleError, Result};
use crate::layout::{ARTIFACT_FILE, BundleLayout, CACHE_DIR};
use crate::progress::ProgressDisplay;

fn file_write_error(path: &Path, e: std::io::Error) -> BundleError {
    BundleError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Configuration options for bundling
#[derive(Debug, Clone)]
pub struct BundleOptions {
    pub quiet: bool,
    pub verbose: bool,
}

impl From<&Cli> for BundleOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// High-level bundle operation
pub struct BundleOperation {
    layout: BundleLayout,
    options: BundleOptions,
}

impl BundleOperation {
    pub fn new(layout: BundleLayout, options: BundleOptions) -> Self {
        Self { layout, options }
    }

    /// Execute the bundling sequence.
    ///
    /// Checks sources, stages the server artifact, replaces the bin mirror,
    /// sweeps stray files out of server/, and drops the package marker.
    pub fn execute(&self) -> Result<()> {
        self.check_sources()?;

        let target_dir = self.layout.target_dir();
        fs::create_dir_all(target_dir).map_err(|e| file_write_error(target_dir, e))?;

        self.copy_server()?;
        self.mirror_bin()?;
        self.sweep_server()?;

        let marker = self.layout.marker_file();
        touch(&marker).map_err(|e| file_write_error(&marker, e))?;

        self.info(&format!(
            "{} bundled server staged at {}",
            style("Done:").green().bold(),
            self.layout.target_dir().display()
        ));
        Ok(())
    }

    /// Fail-fast validation of the three required source locations.
    fn check_sources(&self) -> Result<()> {
        let core_dir = self.layout.core_dir();
        if !core_dir.is_dir() {
            return Err(BundleError::CoreDirNotFound {
                path: core_dir.display().to_string(),
            });
        }

        let artifact = self.layout.bundled_server();
        if !artifact.is_file() {
            return Err(BundleError::ServerArtifactNotFound {
                path: artifact.display().to_string(),
            });
        }

        let bin_dir = self.layout.core_bin_dir();
        if !bin_dir.is_dir() {
            return Err(BundleError::BinDirNotFound {
                path: bin_dir.display().to_string(),
            });
        }

        Ok(())
    }

    /// Copy the server bundle into server/, overwriting any previous copy.
    fn copy_server(&self) -> Result<()> {
        let artifact = self.layout.bundled_server();
        let server_target = self.layout.server_target();

        self.info(&format!(
            "Copying bundled server from {}...",
            artifact.display()
        ));

        fs::create_dir_all(&server_target).map_err(|e| file_write_error(&server_target, e))?;
        let dest = server_target.join(ARTIFACT_FILE);
        fs::copy(&artifact, &dest).map_err(|e| file_write_error(&dest, e))?;
        Ok(())
    }

    /// Replace the bin mirror wholesale; never merged incrementally.
    fn mirror_bin(&self) -> Result<()> {
        let bin_src = self.layout.core_bin_dir();
        let bin_dst = self.layout.bin_target();

        self.info(&format!(
            "Copying bin from {} to {}...",
            bin_src.display(),
            bin_dst.display()
        ));

        if bin_dst.exists() {
            fs::remove_dir_all(&bin_dst).map_err(|e| file_write_error(&bin_dst, e))?;
        }

        let total = count_files(&bin_src);
        let progress = ProgressDisplay::new(total, self.options.quiet || self.options.verbose);

        let result = copy_dir_recursive(&bin_src, &bin_dst, &mut |file| {
            if self.options.verbose {
                println!("  {}", style(file.display()).dim());
            }
            progress.update_file(&file.display().to_string());
        });

        match result {
            Ok(_) => {
                progress.finish();
                Ok(())
            }
            Err(e) => {
                progress.abandon();
                Err(file_write_error(&bin_dst, e))
            }
        }
    }

    /// Delete everything in server/ except the artifact and the bytecode
    /// cache directory, so exactly one file survives.
    fn sweep_server(&self) -> Result<()> {
        let server_target = self.layout.server_target();

        for entry in fs::read_dir(&server_target)? {
            let entry = entry?;
            let name = entry.file_name();
            if name == ARTIFACT_FILE || name == CACHE_DIR {
                continue;
            }
            let path = entry.path();
            remove_entry(&path).map_err(|e| file_write_error(&path, e))?;
        }

        Ok(())
    }

    fn info(&self, message: &str) {
        if !self.options.quiet {
            println!("{}", message);
        }
    }
}
