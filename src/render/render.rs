use crate::tree::Node;

/// One line of the rendered listing: a descendant and its depth below
/// the starting node (direct children are at depth 0).
pub struct Entry {
    pub depth: usize,
    pub node: Node,
}

/// Flattens the proper descendants of `node` into listing entries,
/// children in live order, depth-first.
pub fn entries(node: &Node) -> Vec<Entry> {
    let mut collected = Vec::new();
    collect(node, 0, &mut collected);
    collected
}

fn collect(node: &Node, depth: usize, collected: &mut Vec<Entry>) {
    for child in node.children() {
        collected.push(Entry {
            depth,
            node: child.clone(),
        });
        collect(&child, depth + 1, collected);
    }
}

/// Renders the tree as an indented listing of base names, one
/// descendant per line, two spaces per depth level. Useful for
/// debugging.
pub fn render(node: &Node) -> String {
    entries(node)
        .iter()
        .map(|entry| format!("{}{}\n", "  ".repeat(entry.depth), entry.node.base_name()))
        .collect()
}
