//! Common test utilities for pmxt-bundle integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway monorepo checkout for integration tests
#[allow(dead_code)]
pub struct TestMonorepo {
    /// Temporary directory holding the checkout
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the monorepo root
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestMonorepo {
    /// Create a monorepo with a built core package and an SDK directory
    pub fn new() -> Self {
        let repo = Self::bare();
        repo.write_file("core/dist/server/bundled.js", "// bundled server\n");
        repo.write_file("core/bin/pmxt.js", "#!/usr/bin/env node\n");
        repo.write_file("core/bin/pmxt-server.js", "#!/usr/bin/env node\n// server\n");
        repo
    }

    /// Create only the SDK directory, with no core package at all
    pub fn bare() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        std::fs::create_dir_all(root.join("sdks/python"))
            .expect("Failed to create SDK directory");
        Self { temp, root }
    }

    /// SDK directory the bundler runs from
    pub fn sdk_dir(&self) -> PathBuf {
        self.root.join("sdks/python")
    }

    /// Core package directory
    pub fn core_dir(&self) -> PathBuf {
        self.root.join("core")
    }

    /// Staging directory produced by the bundler
    pub fn target_dir(&self) -> PathBuf {
        self.sdk_dir().join("pmxt/_server")
    }

    /// Write a file under the monorepo root, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.root.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file under the monorepo root
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.root.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists under the monorepo root
    pub fn exists(&self, path: &str) -> bool {
        self.root.join(path).exists()
    }

    /// Remove a file or directory under the monorepo root
    pub fn remove(&self, path: &str) {
        let target = self.root.join(path);
        if target.is_dir() {
            std::fs::remove_dir_all(&target).expect("Failed to remove directory");
        } else {
            std::fs::remove_file(&target).expect("Failed to remove file");
        }
    }

    /// Snapshot a directory tree as sorted (relative path, contents) pairs
    pub fn snapshot(&self, path: &str) -> Vec<(String, Vec<u8>)> {
        let root = self.root.join(path);
        let mut entries = Vec::new();
        collect_files(&root, &root, &mut entries);
        entries.sort();
        entries
    }
}

fn collect_files(root: &std::path::Path, dir: &std::path::Path, out: &mut Vec<(String, Vec<u8>)>) {
    for entry in std::fs::read_dir(dir).expect("Failed to read directory") {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let rel = path
                .strip_prefix(root)
                .expect("Entry outside snapshot root")
                .to_string_lossy()
                .replace('\\', "/");
            let contents = std::fs::read(&path).expect("Failed to read file contents");
            out.push((rel, contents));
        }
    }
}
