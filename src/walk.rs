//! Flat enumeration of the files whose content gets embedded.

use crate::types::FileEntry;
use std::fs;
use std::path::{Path, PathBuf};

/// Enumerates every file under `root` as a root-relative [`FileEntry`].
///
/// Within a single directory, files are emitted in lexicographic name order.
/// Sibling subdirectories are descended into in the filesystem's native
/// enumeration order, NOT sorted; on filesystems with unspecified readdir
/// order the file sequence can therefore differ between runs even though the
/// rendered tree never does. Existing artifacts depend on this asymmetry, so
/// it is deliberate.
///
/// A directory's own files always precede anything inside its
/// subdirectories. Directories that cannot be listed are skipped; `root` is
/// assumed to have been validated by the caller.
pub fn enumerate_files(root: &Path) -> Vec<FileEntry> {
    let mut files = Vec::new();
    // Explicit work stack instead of recursion so adversarially deep trees
    // cannot overflow the call stack.
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        let mut names = Vec::new();
        let mut subdirs = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                subdirs.push(path);
            } else {
                names.push(entry.file_name());
            }
        }
        names.sort();
        for name in names {
            let abs = dir.join(name);
            let rel = abs
                .strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or(abs);
            files.push(FileEntry { path: rel });
        }
        // LIFO stack: push in reverse so the first subdirectory reported by
        // the filesystem is the next one descended into.
        subdirs.reverse();
        pending.extend(subdirs);
    }
    files
}
