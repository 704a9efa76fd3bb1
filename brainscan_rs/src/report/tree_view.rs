//! Plain-text tree rendering with box-drawing glyphs.
//!
//! ```text
//! 📁 src/
//! ├── components/
//! │   └── Button.vue
//! └── main.ts
//! ```
//!
//! Every ancestor level is drawn as `│   `, whether or not that ancestor was
//! the last of its siblings.

use std::path::Path;

use crate::types::TreeNode;

const FOLDER_ICON: &str = "📁";
const PIPE: &str = "│   ";
const TEE: &str = "├── ";
const ELBOW: &str = "└── ";

/// Header line followed by one line per node.
pub fn tree_view_lines(root_label: &str, tree: &[TreeNode]) -> Vec<String> {
    let mut lines = vec![format!("{FOLDER_ICON} {root_label}/")];
    lines.extend(render_tree_view(tree));
    lines
}

/// Node lines only, no header.
pub fn render_tree_view(tree: &[TreeNode]) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(tree, 0, &mut lines);
    lines
}

fn render_into(nodes: &[TreeNode], depth: usize, lines: &mut Vec<String>) {
    let prefix = PIPE.repeat(depth);
    for (idx, node) in nodes.iter().enumerate() {
        let branch = if idx + 1 == nodes.len() { ELBOW } else { TEE };
        match node {
            TreeNode::Folder(folder) => {
                lines.push(format!("{prefix}{branch}{}/", base_name(&folder.folder)));
                render_into(&folder.children, depth + 1, lines);
            }
            TreeNode::File(file) => {
                lines.push(format!("{prefix}{branch}{}", base_name(&file.file)));
            }
        }
    }
}

fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
