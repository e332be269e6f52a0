//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

/// Count regular files under a directory, recursively.
pub fn count_files(dir: &Path) -> u64 {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .count() as u64
}

/// Copy a directory recursively, invoking `on_file` for every file copied.
///
/// Returns the number of files copied. Symlink metadata is not preserved;
/// the monorepo bin directory holds plain script files only.
pub fn copy_dir_recursive<F>(src: &Path, dst: &Path, on_file: &mut F) -> std::io::Result<u64>
where
    F: FnMut(&Path),
{
    if !dst.exists() {
        fs::create_dir_all(dst)?;
    }

    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let entry_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if entry_path.is_dir() {
            copied += copy_dir_recursive(&entry_path, &dst_path, on_file)?;
        } else {
            fs::copy(&entry_path, &dst_path)?;
            on_file(&entry_path);
            copied += 1;
        }
    }

    Ok(copied)
}

/// Remove a directory entry: directories recursively, files singly.
pub fn remove_entry(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Create an empty file if absent; an existing file is left untouched.
pub fn touch(path: &Path) -> std::io::Result<()> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
}
