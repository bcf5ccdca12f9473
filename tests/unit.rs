use repocat::{Framer, Verdict, build_tree, classify, render_content, render_tree};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
#[test]
fn test_classify_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plain.txt");
    fs::write(&path, "hello world\n").unwrap();
    assert_eq!(classify(&path), Verdict::Text);
}
#[test]
fn test_classify_null_byte() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bin.dat");
    fs::write(&path, [b'a', 0, b'b']).unwrap();
    assert_eq!(classify(&path), Verdict::Binary);
}
#[test]
fn test_classify_null_beyond_probe() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("late_null.dat");
    let mut bytes = vec![b'x'; 1024];
    bytes.push(0);
    fs::write(&path, bytes).unwrap();
    assert_eq!(classify(&path), Verdict::Text);
}
#[test]
fn test_classify_unreadable_is_binary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does_not_exist");
    assert_eq!(classify(&path), Verdict::Binary);
}
#[test]
fn test_render_tree_sorted_at_every_level() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("z.txt"), "z").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::create_dir(dir.path().join("mid")).unwrap();
    fs::write(dir.path().join("mid/b.txt"), "b").unwrap();
    fs::write(dir.path().join("mid/a.txt"), "a").unwrap();
    let tree = build_tree(dir.path()).unwrap();
    let lines = render_tree(&tree);
    assert_eq!(lines, vec!["a.txt", "mid/", "    a.txt", "    b.txt", "z.txt"]);
    assert_eq!(render_tree(&tree), lines);
}
#[test]
fn test_build_tree_invalid_root() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.txt");
    fs::write(&path, "not a dir").unwrap();
    assert!(build_tree(&path).is_err());
}
#[test]
fn test_render_content_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("code.rs");
    fs::write(&path, "fn main() {}\n").unwrap();
    let content = render_content(&path, Path::new("code.rs"), Verdict::Text);
    assert_eq!(content, "fn main() {}\n");
}
#[test]
fn test_render_content_binary_placeholder() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("img.png");
    fs::write(&path, [0u8, 1, 2]).unwrap();
    let content = render_content(&path, Path::new("assets/img.png"), Verdict::Binary);
    assert_eq!(content, "// Binary file content skipped: assets/img.png\n");
}
#[test]
fn test_render_content_latin1_fallback() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legacy.txt");
    fs::write(&path, [b'c', b'a', b'f', 0xE9, b'\n']).unwrap();
    let content = render_content(&path, Path::new("legacy.txt"), Verdict::Text);
    assert_eq!(content, "café\n");
}
#[test]
fn test_render_content_read_failure_placeholder() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gone.txt");
    let content = render_content(&path, Path::new("gone.txt"), Verdict::Text);
    assert!(content.starts_with("// Failed to read file: "));
    assert!(content.ends_with('\n'));
}
#[test]
fn test_framer_first_file_has_no_start_marker() {
    let mut framer = Framer::new(Vec::new());
    framer.preamble(&["a.txt".to_string()]).unwrap();
    framer.file(Path::new("a.txt"), "hi\n").unwrap();
    framer.file(Path::new("b.txt"), "yo\n").unwrap();
    let out = String::from_utf8(framer.into_inner()).unwrap();
    assert_eq!(
        out,
        "Repository Tree:\na.txt\n\nhi\n[End of file No.0]\n\nb.txt:\n[Start of file No.1]\nyo\n[End of file No.1]\n\n"
    );
}
#[test]
fn test_framer_marker_abuts_unterminated_content() {
    let mut framer = Framer::new(Vec::new());
    framer.preamble(&[]).unwrap();
    framer.file(Path::new("a.txt"), "no newline").unwrap();
    let out = String::from_utf8(framer.into_inner()).unwrap();
    assert_eq!(out, "Repository Tree:\n\n\nno newline[End of file No.0]\n\n");
}
#[test]
fn test_framer_counts_files() {
    let mut framer = Framer::new(Vec::new());
    framer.preamble(&[]).unwrap();
    assert_eq!(framer.files_written(), 0);
    framer.file(Path::new("a"), "").unwrap();
    framer.file(Path::new("b"), "").unwrap();
    assert_eq!(framer.files_written(), 2);
}
