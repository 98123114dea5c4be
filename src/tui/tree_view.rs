//! Syntax tree panel — scroll state and tree flattening for display.

use crate::remote::{SyntaxNode, SyntaxTree};

/// What a flattened row represents, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Kind,
    Field,
    Leaf,
}

/// One display row of the flattened tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub depth: usize,
    pub kind: RowKind,
    pub text: String,
}

/// Tree panel state — a scrollable view over the flattened tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreePanel {
    scroll: usize,
}

impl TreePanel {
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Reset scroll to the top. Called when new results land.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, row_count: usize, viewport: usize) {
        let max = row_count.saturating_sub(viewport);
        self.scroll = (self.scroll + 1).min(max);
    }

    pub fn page_up(&mut self, viewport: usize) {
        self.scroll = self.scroll.saturating_sub(viewport.max(1));
    }

    pub fn page_down(&mut self, row_count: usize, viewport: usize) {
        let max = row_count.saturating_sub(viewport);
        self.scroll = (self.scroll + viewport.max(1)).min(max);
    }
}

/// Flatten a tree into indented display rows, depth-first.
///
/// Node kinds and field names get their own rows; leaves inline under
/// them. List nodes contribute no row, only their children.
pub fn flatten(tree: &SyntaxTree) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    flatten_node(&tree.root, 0, &mut rows);
    rows
}

fn flatten_node(node: &SyntaxNode, depth: usize, rows: &mut Vec<TreeRow>) {
    match node {
        SyntaxNode::Node { kind, fields } => {
            rows.push(TreeRow {
                depth,
                kind: RowKind::Kind,
                text: kind.clone(),
            });
            for (name, child) in fields {
                if let SyntaxNode::Leaf(value) = child {
                    rows.push(TreeRow {
                        depth: depth + 1,
                        kind: RowKind::Field,
                        text: format!("{name}: {value}"),
                    });
                } else {
                    rows.push(TreeRow {
                        depth: depth + 1,
                        kind: RowKind::Field,
                        text: name.clone(),
                    });
                    flatten_node(child, depth + 2, rows);
                }
            }
        }
        SyntaxNode::Leaf(value) => {
            rows.push(TreeRow {
                depth,
                kind: RowKind::Leaf,
                text: value.clone(),
            });
        }
        SyntaxNode::List(items) => {
            for item in items {
                flatten_node(item, depth, rows);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(s: &str) -> SyntaxNode {
        SyntaxNode::Leaf(s.to_string())
    }

    fn node(kind: &str, fields: Vec<(&str, SyntaxNode)>) -> SyntaxNode {
        SyntaxNode::Node {
            kind: kind.to_string(),
            fields: fields
                .into_iter()
                .map(|(n, c)| (n.to_string(), c))
                .collect(),
        }
    }

    fn sample_tree() -> SyntaxTree {
        SyntaxTree {
            root: node(
                "programa",
                vec![
                    ("nome", leaf("main")),
                    (
                        "corpo",
                        SyntaxNode::List(vec![
                            node("retorno", vec![("valor", leaf("0"))]),
                        ]),
                    ),
                ],
            ),
        }
    }

    #[test]
    fn root_row_is_node_kind() {
        let rows = flatten(&sample_tree());
        assert_eq!(rows[0].kind, RowKind::Kind);
        assert_eq!(rows[0].text, "programa");
        assert_eq!(rows[0].depth, 0);
    }

    #[test]
    fn leaf_fields_inline_their_value() {
        let rows = flatten(&sample_tree());
        let name_row = rows.iter().find(|r| r.text.starts_with("nome")).unwrap();
        assert_eq!(name_row.text, "nome: main");
        assert_eq!(name_row.kind, RowKind::Field);
        assert_eq!(name_row.depth, 1);
    }

    #[test]
    fn list_children_keep_parent_depth() {
        let rows = flatten(&sample_tree());
        // "corpo" field at depth 1, list itself invisible, "retorno" at depth 2
        let corpo = rows.iter().position(|r| r.text == "corpo").unwrap();
        assert_eq!(rows[corpo].depth, 1);
        assert_eq!(rows[corpo + 1].text, "retorno");
        assert_eq!(rows[corpo + 1].depth, 2);
    }

    #[test]
    fn bare_leaf_root_flattens_to_one_row() {
        let tree = SyntaxTree { root: leaf("42") };
        let rows = flatten(&tree);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, RowKind::Leaf);
    }

    #[test]
    fn scroll_clamps() {
        let mut panel = TreePanel::default();
        panel.scroll_up();
        assert_eq!(panel.scroll(), 0);
        for _ in 0..100 {
            panel.scroll_down(12, 5);
        }
        assert_eq!(panel.scroll(), 7);
        panel.reset();
        assert_eq!(panel.scroll(), 0);
    }

    #[test]
    fn page_scroll_clamps() {
        let mut panel = TreePanel::default();
        panel.page_down(8, 20);
        assert_eq!(panel.scroll(), 0);
        panel.page_down(100, 20);
        assert_eq!(panel.scroll(), 20);
        panel.page_up(20);
        assert_eq!(panel.scroll(), 0);
    }
}
