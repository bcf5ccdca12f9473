use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Whether a file's content is embedded as text or replaced by a placeholder.
///
/// The verdict is a pure function of the file's first 1024 bytes: any null
/// byte means [`Verdict::Binary`]. A file that cannot be probed at all is
/// also `Binary`, so classification never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Text,
    Binary,
}

/// One file scheduled for embedding.
///
/// The path is relative to the snapshot root, using the platform's native
/// separators. The sequence index is implicit: it is the entry's position in
/// the enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: PathBuf,
}

/// What a completed snapshot produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSummary {
    /// Number of files embedded in the artifact.
    pub files: usize,
}
