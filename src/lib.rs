//! # Repocat
//!
//! `repocat` flattens a directory tree into one linear text artifact: a
//! sorted, indented tree listing followed by the content of every file, each
//! framed by sequence-numbered markers. The artifact is meant for tools that
//! consume a codebase as a single document rather than a filesystem.
//!
//! Binary files (probed by a null byte in the first 1024 bytes) and
//! unreadable files are embedded as placeholder lines instead of content, so
//! a run only fails outright when the root itself is not a directory.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use repocat::snapshot_to_file;
//!
//! let summary = snapshot_to_file(".", "snapshot.txt").expect("Failed to snapshot directory");
//! println!("Embedded {} files", summary.files);
//! ```
//!
//! The pipeline also runs against any writer:
//!
//! ```no_run
//! let mut buf = Vec::new();
//! let summary = repocat::snapshot(".", &mut buf).expect("Failed to snapshot directory");
//! ```

mod content;
mod engine;
mod error;
mod output;
mod tree;
mod types;
mod walk;

pub use content::{classify, render_content};
pub use engine::{snapshot, snapshot_to_file};
pub use error::RepocatError;
pub use output::Framer;
pub use tree::{TreeNode, build_tree, render_tree};
pub use types::{FileEntry, SnapshotSummary, Verdict};
pub use walk::enumerate_files;
