// EssaySort - platform/fs.rs
//
// Small filesystem helpers shared by the source loader, the preference
// store and the exporters.

use std::io;
use std::path::Path;

/// Read a file as text, refusing files larger than `max_size` bytes.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_text_limited(path: &Path, max_size: u64) -> Result<String, ReadError> {
    let size = std::fs::metadata(path).map_err(ReadError::Io)?.len();
    if size > max_size {
        return Err(ReadError::TooLarge { size });
    }
    let bytes = std::fs::read(path).map_err(ReadError::Io)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Failure modes of `read_text_limited`.
#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    TooLarge { size: u64 },
}

/// Write `bytes` to `path` atomically (write temp, then rename).
///
/// Creates all parent directories as needed. A crash between write and
/// rename loses the new content but never corrupts the previous file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp_name);

    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        e
    })
}
