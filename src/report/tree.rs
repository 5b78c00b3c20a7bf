//! Text tree rendering of collected case paths.
//!
//! Renders case ids as a `Tests` root with module, group, and case levels,
//! preserving the order ids were collected in.

use crate::model::CaseId;

/// One node of the rendered tree.
struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn new(label: &str) -> Self {
        Node {
            label: label.to_string(),
            children: Vec::new(),
        }
    }

    /// Find or append a child with this label, returning its index.
    fn child(&mut self, label: &str) -> usize {
        if let Some(index) = self.children.iter().position(|c| c.label == label) {
            return index;
        }
        self.children.push(Node::new(label));
        self.children.len() - 1
    }
}

/// Render collected case ids as a text tree.
///
/// ```text
/// Tests
/// ├── module1
/// │   ├── TestClass
/// │   │   ├── test_method_one
/// │   │   └── test_method_two
/// │   └── test_outside_class
/// └── module2
///     └── test_with_fixture
/// ```
pub fn render_tree(ids: &[CaseId]) -> String {
    let mut root = Node::new("Tests");
    for id in ids {
        let mut current = &mut root;
        for segment in id.segments() {
            let index = current.child(segment);
            current = &mut current.children[index];
        }
    }

    let mut out = String::new();
    out.push_str(&root.label);
    out.push('\n');
    render_children(&root, "", &mut out);
    out
}

fn render_children(node: &Node, prefix: &str, out: &mut String) {
    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate() {
        let last = index + 1 == count;
        let branch = if last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(branch);
        out.push_str(&child.label);
        out.push('\n');

        let child_prefix = if last { "    " } else { "│   " };
        render_children(child, &format!("{}{}", prefix, child_prefix), out);
    }
}
