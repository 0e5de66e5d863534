use std::fs;
use std::io;
use std::io::Write as _;
use std::path::Path;

use log::{debug, trace};
use tempfile::NamedTempFile;

mod macros;

pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read_to_string(path)
}

/// Writes the `contents` into a temporary file next to `path` and then moves
/// it into place, so a failed write never leaves a truncated file behind.
///
/// Missing parent directories are created.
pub fn write_atomic(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    let path = path.as_ref();
    trace!("writing to: {}", path.display());

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.is_dir() {
        debug!("creating directory: {}", parent.display());
        fs::create_dir_all(parent)?;
    }

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(contents.as_ref())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}
