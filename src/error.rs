use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors that can occur while scanning, loading, or transforming.
///
/// Every failure is fatal to the calling operation: there is no retry or
/// skip-and-continue policy. A bad file aborts the fetch for that index.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The expected domain directory is missing or not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A domain directory exists but contains zero files. Rejected at
    /// construction so index wraparound never computes `i % 0`.
    #[error("no files found in {}", .0.display())]
    EmptyDomain(PathBuf),

    /// Index past the end of the manifest.
    #[error("index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Opening or decoding an image file failed.
    #[error("failed to decode {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A pipeline op was applied at the wrong stage (e.g. Resize after
    /// ToTensor, or Normalize before it).
    #[error("transform op {op} requires {expected} input")]
    StageMismatch {
        op: &'static str,
        expected: &'static str,
    },

    /// The pipeline finished without ever converting to a tensor.
    #[error("transform pipeline produced no tensor (missing ToTensor op)")]
    NoTensorOutput,

    /// Element count does not match the declared tensor shape.
    #[error("element count mismatch: shape [{channels}, {height}, {width}] requires {expected} elements, got {got}")]
    ElementCountMismatch {
        channels: usize,
        height: usize,
        width: usize,
        expected: usize,
        got: usize,
    },

    /// Directory enumeration failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
