//! Scratch files for the vocabulary and output integration tests.
//!
//! Custom vocabulary documents and generated identity files are written
//! under `target/identity-forge-tests`, one directory per call, so parallel
//! tests never share a file.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;

const SCRATCH_ROOT: &str = "target/identity-forge-tests";

/// Reserve a path for a vocabulary or output file in a fresh directory.
///
/// The directory is created; the file is not.
///
/// # Errors
///
/// Returns the error from creating the scratch directory.
pub fn unique_temp_path(label: &str, file_name: &str) -> io::Result<Utf8PathBuf> {
    static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);
    let dir = Utf8Path::new(SCRATCH_ROOT).join(format!(
        "{label}-{}-{}",
        std::process::id(),
        NEXT_DIR.fetch_add(1, Ordering::Relaxed)
    ));
    Dir::open_ambient_dir(".", ambient_authority())?.create_dir_all(&dir)?;
    Ok(dir.join(file_name))
}

/// Open the directory holding a vocabulary or output file.
///
/// # Errors
///
/// Returns the error from opening the directory.
pub fn open_parent_dir(path: &Utf8Path) -> io::Result<Dir> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    Dir::open_ambient_dir(parent, ambient_authority())
}

/// Write a vocabulary document (or stale output) to a fresh scratch file.
///
/// # Errors
///
/// Returns the error from creating the directory or writing the file.
pub fn write_temp_file(label: &str, file_name: &str, contents: &str) -> io::Result<Utf8PathBuf> {
    let path = unique_temp_path(label, file_name)?;
    open_parent_dir(&path)?.write(file_name, contents)?;
    Ok(path)
}
