//! Fixed relative layout of the pmxt monorepo and SDK package
//!
//! The bundler reads from the core package and writes into the Python
//! package tree. All paths derive from two roots: the SDK directory the
//! tool runs in, and the core directory two levels up from it.

use std::path::{Path, PathBuf};

use crate::error::{BundleError, Result};

/// File name of the built server bundle, both in core and in the package.
pub const ARTIFACT_FILE: &str = "bundled.js";

/// Interpreter bytecode cache directory spared by the server/ sweep.
pub const CACHE_DIR: &str = "__pycache__";

/// Marker file that makes the staged directory an importable package.
pub const MARKER_FILE: &str = "__init__.py";

/// Resolved source and destination roots for one bundling run
#[derive(Debug, Clone)]
pub struct BundleLayout {
    core_dir: PathBuf,
    target_dir: PathBuf,
}

impl BundleLayout {
    /// Resolve the layout from optional CLI overrides.
    ///
    /// The SDK root defaults to the current directory and must exist; the
    /// core directory defaults to `../../core` relative to the SDK root
    /// (the monorepo places `sdks/python` two levels below the repo root).
    pub fn resolve(sdk_dir: Option<PathBuf>, core_dir: Option<PathBuf>) -> Result<Self> {
        let sdk_root = match sdk_dir {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| BundleError::IoError {
                message: format!("Failed to get current directory: {}", e),
            })?,
        };
        let sdk_root = dunce::canonicalize(&sdk_root).map_err(|e| BundleError::IoError {
            message: format!("Failed to resolve SDK directory {}: {}", sdk_root.display(), e),
        })?;

        let core_dir = core_dir.unwrap_or_else(|| sdk_root.join("..").join("..").join("core"));
        let target_dir = sdk_root.join("pmxt").join("_server");

        Ok(Self {
            core_dir,
            target_dir,
        })
    }

    /// Core package root (source side)
    pub fn core_dir(&self) -> &Path {
        &self.core_dir
    }

    /// Staging root inside the Python package (destination side)
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Built server bundle inside core
    pub fn bundled_server(&self) -> PathBuf {
        self.core_dir.join("dist").join("server").join(ARTIFACT_FILE)
    }

    /// Executable entry points inside core
    pub fn core_bin_dir(&self) -> PathBuf {
        self.core_dir.join("bin")
    }

    /// Destination directory holding the copied server bundle
    pub fn server_target(&self) -> PathBuf {
        self.target_dir.join("server")
    }

    /// Destination mirror of the core bin directory
    pub fn bin_target(&self) -> PathBuf {
        self.target_dir.join("bin")
    }

    /// Package marker file at the staging root
    pub fn marker_file(&self) -> PathBuf {
        self.target_dir.join(MARKER_FILE)
    }
}
