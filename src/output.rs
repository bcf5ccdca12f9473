//! The framing protocol for the output artifact.
//!
//! The artifact is a tree preamble followed by numbered file sections:
//!
//! ```text
//! Repository Tree:
//! <tree lines>
//! <blank line>
//! <content of file 0>[End of file No.0]
//!
//! <path of file 1>:
//! [Start of file No.1]
//! <content of file 1>[End of file No.1]
//! ...
//! ```
//!
//! The first file has no start marker; the transition from the preamble to
//! its content is implicit. Content is written verbatim, so a file without a
//! trailing newline has its end marker on the same line.

use std::io::{self, Write};
use std::path::Path;

/// Incremental writer for the artifact, tracking the next sequence number.
///
/// Call [`Framer::preamble`] once, then [`Framer::file`] once per file in
/// embedding order. The asymmetric first-file rule lives entirely here so it
/// can be exercised against an in-memory writer.
#[derive(Debug)]
pub struct Framer<W: Write> {
    out: W,
    next: usize,
}

impl<W: Write> Framer<W> {
    pub fn new(out: W) -> Self {
        Self { out, next: 0 }
    }

    /// Writes the tree block. Exactly one blank line separates it from the
    /// first file's content; an empty tree still produces the separator.
    pub fn preamble(&mut self, tree_lines: &[String]) -> io::Result<()> {
        write!(self.out, "Repository Tree:\n{}\n\n", tree_lines.join("\n"))
    }

    /// Writes one file section and advances the sequence number.
    ///
    /// Every file after the first is introduced by `{path}:` and a start
    /// marker; every file is closed by an end marker and a blank line.
    pub fn file(&mut self, path: &Path, content: &str) -> io::Result<()> {
        if self.next > 0 {
            write!(self.out, "{}:\n[Start of file No.{}]\n", path.display(), self.next)?;
        }
        self.out.write_all(content.as_bytes())?;
        write!(self.out, "[End of file No.{}]\n\n", self.next)?;
        self.next += 1;
        Ok(())
    }

    /// Number of file sections written so far.
    pub fn files_written(&self) -> usize {
        self.next
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
