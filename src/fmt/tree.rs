//! Preorder tree listing.
//!
//! One node per line, depth shown as leading dots. This is the format
//! behind the `--ast` and `--st` flags and is shared by the raw and the
//! standardized tree since both are plain [`TreeNode`]s.

use std::fmt::Write;

use crate::ast::TreeNode;

/// Render a tree in preorder, one node per line.
pub fn tree_to_string(root: &TreeNode) -> String {
    let mut out = String::new();
    write_node(root, 0, &mut out);
    out
}

fn write_node(node: &TreeNode, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push('.');
    }
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", node.label);
    for child in &node.children {
        write_node(child, depth + 1, out);
    }
}
