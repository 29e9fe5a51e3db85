use crate::tree::Node;

/// Visits every descendant of `node` with a pre-order traversal:
/// each child is visited before its own children, siblings left to
/// right. The node passed in is not visited.
///
/// Use this when parents must be processed before the nodes under them
/// (copying a tree to disk, printing). The walk iterates the live
/// children sequence by index, so the visitor must NOT remove the
/// visited node: removal shifts the indices of the siblings to its
/// right and can skip or repeat them. Removal belongs in
/// [`crate::walk::post_order`].
pub fn pre_order<F>(node: &Node, visitor: &mut F)
where
    F: FnMut(&Node),
{
    if !node.has_children() {
        return;
    }

    let mut index = 0;
    while index < node.child_count() {
        let Some(child) = node.child(index) else {
            break;
        };
        visitor(&child);
        pre_order(&child, visitor);
        index += 1;
    }
}

/// Pre-order traversal with a fallible visitor: stops at the first
/// error and propagates it, leaving the effects of already visited
/// nodes in place.
pub fn try_pre_order<F, E>(node: &Node, visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&Node) -> Result<(), E>,
{
    if !node.has_children() {
        return Ok(());
    }

    let mut index = 0;
    while index < node.child_count() {
        let Some(child) = node.child(index) else {
            break;
        };
        visitor(&child)?;
        try_pre_order(&child, visitor)?;
        index += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;

    fn directory(name: &str) -> Node {
        Node::with_kind(name, NodeKind::Directory)
    }

    fn leaf(name: &str) -> Node {
        Node::with_kind(name, NodeKind::File)
    }

    fn visited_names(node: &Node) -> Vec<String> {
        let mut names = Vec::new();
        pre_order(node, &mut |child| names.push(child.base_name()));
        names
    }

    #[test]
    fn test_flat_siblings_are_visited_in_insertion_order() {
        let root = directory("root");
        root.add_child(leaf("a"));
        root.add_child(leaf("b"));
        root.add_child(leaf("c"));

        assert_eq!(visited_names(&root), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parent_is_visited_before_its_children() {
        let root = directory("root");
        let a = directory("a");
        a.add_child(leaf("a1"));
        root.add_child(a);
        root.add_child(leaf("b"));

        assert_eq!(visited_names(&root), vec!["a", "a1", "b"]);
    }

    #[test]
    fn test_every_descendant_is_visited_exactly_once() {
        let root = directory("root");
        let left = directory("left");
        left.add_child(leaf("l1"));
        left.add_child(leaf("l2"));
        let right = directory("right");
        right.add_child(leaf("r1"));
        root.add_child(left);
        root.add_child(right);

        let names = visited_names(&root);

        assert_eq!(names.len(), 5);
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_the_starting_node_is_not_visited() {
        let root = directory("root");
        root.add_child(leaf("only"));

        assert!(!visited_names(&root).contains(&"root".to_string()));
    }

    #[test]
    fn test_childless_node_is_a_noop() {
        let root = directory("root");

        assert!(visited_names(&root).is_empty());
    }

    #[test]
    fn test_try_pre_order_stops_at_the_first_error() {
        let root = directory("root");
        root.add_child(leaf("a"));
        root.add_child(leaf("b"));
        root.add_child(leaf("c"));

        let mut visited = Vec::new();
        let result = try_pre_order(&root, &mut |child| {
            visited.push(child.base_name());
            if child.base_name() == "b" {
                Err("broke on b")
            } else {
                Ok(())
            }
        });

        assert_eq!(result.unwrap_err(), "broke on b");
        assert_eq!(visited, vec!["a", "b"]);
    }

    #[test]
    fn test_try_pre_order_visits_everything_on_success() {
        let root = directory("root");
        let a = directory("a");
        a.add_child(leaf("a1"));
        root.add_child(a);

        let mut visited = Vec::new();
        let result: Result<(), ()> = try_pre_order(&root, &mut |child| {
            visited.push(child.base_name());
            Ok(())
        });

        assert!(result.is_ok());
        assert_eq!(visited, vec!["a", "a1"]);
    }
}
