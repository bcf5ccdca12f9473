//! Binary classification and per-file content rendering.

use crate::types::Verdict;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// How many leading bytes the binary probe examines.
const PROBE_LEN: u64 = 1024;

/// Classifies a file by probing its first [`PROBE_LEN`] bytes.
///
/// A null byte anywhere in the probe means [`Verdict::Binary`]. Any failure
/// to open or read the file also yields `Binary`, failing safe toward
/// skipping the content. This is a heuristic: text containing embedded nulls
/// is treated as binary, and binary formats with a null-free prefix are
/// treated as text. Both misclassifications are accepted behavior.
pub fn classify(path: &Path) -> Verdict {
    let mut chunk = Vec::with_capacity(PROBE_LEN as usize);
    let Ok(file) = File::open(path) else {
        return Verdict::Binary;
    };
    if file.take(PROBE_LEN).read_to_end(&mut chunk).is_err() {
        return Verdict::Binary;
    }
    if chunk.contains(&0) {
        Verdict::Binary
    } else {
        Verdict::Text
    }
}

/// Produces the string embedded in the artifact for one file.
///
/// Binary files get a fixed placeholder naming the relative path. Text files
/// are read whole and decoded as UTF-8; invalid UTF-8 is re-decoded as
/// Latin-1, which maps every byte to a character and cannot fail. A read
/// failure degrades to an error placeholder and a diagnostic on stderr; it
/// never aborts the run.
pub fn render_content(abs: &Path, rel: &Path, verdict: Verdict) -> String {
    match verdict {
        Verdict::Binary => {
            #[cfg(feature = "logging")]
            tracing::debug!("Binary file detected: {}", rel.display());
            format!("// Binary file content skipped: {}\n", rel.display())
        }
        Verdict::Text => match fs::read(abs) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(err) => decode_latin1(err.as_bytes()),
            },
            Err(err) => {
                eprintln!("Error reading file ({}): {}", rel.display(), err);
                format!("// Failed to read file: {err}\n")
            }
        },
    }
}

/// Latin-1 is a total decoding: byte value == code point.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
