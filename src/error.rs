//! Error types and handling for pmxt-bundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bundling operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundleError {
    // Monorepo layout errors - detected before any filesystem mutation
    #[error("core directory not found at {path}")]
    #[diagnostic(
        code(pmxt_bundle::core::not_found),
        help("This tool must be run from the monorepo structure (sdks/python next to core/)")
    )]
    CoreDirNotFound { path: String },

    #[error("Bundled server not found at {path}")]
    #[diagnostic(
        code(pmxt_bundle::core::artifact_missing),
        help("Please run 'npm run build && npm run bundle:server' in core/")
    )]
    ServerArtifactNotFound { path: String },

    #[error("bin directory not found at {path}")]
    #[diagnostic(
        code(pmxt_bundle::core::bin_missing),
        help("Check that the core package checkout is complete")
    )]
    BinDirNotFound { path: String },

    // File system errors
    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(pmxt_bundle::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(pmxt_bundle::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BundleError {
    fn from(err: std::io::Error) -> Self {
        BundleError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundleError>;
