//! Hierarchical tree model of a directory, plus its line renderer.
//!
//! The builder walks the filesystem once and records every entry; ordering is
//! not imposed during the walk. The child container is a [`BTreeMap`], so the
//! renderer observes names in lexicographic order regardless of the order the
//! filesystem reported them in.

use crate::error::RepocatError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One filesystem entry in the snapshot tree.
///
/// Directory children are keyed by entry name; a file is a bare leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Directory { children: BTreeMap<String, TreeNode> },
    File,
}

/// Builds the tree for `root`.
///
/// Every reachable subdirectory is descended into, with no depth limit and no
/// symlink-loop protection. Subdirectories that cannot be listed are kept as
/// empty directories rather than failing the walk.
///
/// # Errors
///
/// Returns [`RepocatError::InvalidRoot`] if `root` is missing or not a
/// directory. This is the only failure mode.
pub fn build_tree(root: &Path) -> Result<TreeNode, RepocatError> {
    if !root.is_dir() {
        return Err(RepocatError::InvalidRoot(root.to_path_buf()));
    }
    Ok(build_node(root))
}

fn build_node(dir: &Path) -> TreeNode {
    let mut children = BTreeMap::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();
            let node = if path.is_dir() {
                build_node(&path)
            } else {
                TreeNode::File
            };
            children.insert(name, node);
        }
    }
    TreeNode::Directory { children }
}

/// Renders the tree as indented display lines.
///
/// At every level entries appear in lexicographic order, directories and
/// files interleaved. A directory is shown as `name/` and its children follow
/// with the indent widened by four spaces. The root node itself produces no
/// line. Rendering is a pure function of the tree, so repeated calls yield
/// identical lines.
pub fn render_tree(node: &TreeNode) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(node, "", &mut lines);
    lines
}

fn render_into(node: &TreeNode, indent: &str, lines: &mut Vec<String>) {
    let TreeNode::Directory { children } = node else {
        return;
    };
    for (name, child) in children {
        match child {
            TreeNode::File => lines.push(format!("{indent}{name}")),
            TreeNode::Directory { .. } => {
                lines.push(format!("{indent}{name}/"));
                render_into(child, &format!("{indent}    "), lines);
            }
        }
    }
}
