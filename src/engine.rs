use crate::content::{classify, render_content};
use crate::error::RepocatError;
use crate::output::Framer;
use crate::tree::{build_tree, render_tree};
use crate::types::SnapshotSummary;
use crate::walk::enumerate_files;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Runs the full pipeline against an arbitrary writer.
///
/// Order is fixed: validate the root, build and render the tree, write the
/// preamble, then for each enumerated file classify, read, and write its
/// framed section. Per-file read problems degrade to placeholders inside the
/// artifact; the only errors surfaced here are an invalid root and failures
/// writing to `out`.
pub fn snapshot(root: impl AsRef<Path>, out: impl Write) -> Result<SnapshotSummary, RepocatError> {
    let root = root.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!("Starting snapshot with root: {}", root.display());
    let tree = build_tree(root)?;
    let lines = render_tree(&tree);
    let mut framer = Framer::new(out);
    framer.preamble(&lines)?;
    let entries = enumerate_files(root);
    #[cfg(feature = "logging")]
    tracing::debug!("Embedding {} files", entries.len());
    for entry in &entries {
        let abs = root.join(&entry.path);
        let verdict = classify(&abs);
        let content = render_content(&abs, &entry.path, verdict);
        framer.file(&entry.path, &content)?;
    }
    Ok(SnapshotSummary {
        files: framer.files_written(),
    })
}

/// Snapshots `root` into the artifact at `output`.
///
/// The root is validated before the artifact is created, so an invalid root
/// leaves no output behind. The artifact handle is held for the whole run
/// and flushed and closed on completion; source files are opened and closed
/// one at a time inside the loop.
pub fn snapshot_to_file(
    root: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<SnapshotSummary, RepocatError> {
    let root = root.as_ref();
    let output = output.as_ref();
    if !root.is_dir() {
        return Err(RepocatError::InvalidRoot(root.to_path_buf()));
    }
    let file = File::create(output).map_err(|e| RepocatError::io(output, e))?;
    let mut writer = BufWriter::new(file);
    let summary = snapshot(root, &mut writer)?;
    writer.flush().map_err(|e| RepocatError::io(output, e))?;
    Ok(summary)
}
