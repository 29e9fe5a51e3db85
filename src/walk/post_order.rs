use crate::tree::Node;

/// Visits every descendant of `node` with a post-order traversal:
/// each child's own children are visited before the child itself, and
/// siblings are visited right to left. The node passed in is not
/// visited.
///
/// The reverse sibling order is load-bearing, not cosmetic: the walk
/// iterates the live children sequence by index from the end, so a
/// visitor may remove the node it was just handed without perturbing
/// the indices of the not-yet-visited siblings to its left. This is
/// the strategy to use for destructive removal, or for any operation
/// that needs a subtree fully handled before its parent.
pub fn post_order<F>(node: &Node, visitor: &mut F)
where
    F: FnMut(&Node),
{
    if !node.has_children() {
        return;
    }

    let mut index = node.child_count();
    while index > 0 {
        index -= 1;
        let Some(child) = node.child(index) else {
            continue;
        };
        post_order(&child, visitor);
        visitor(&child);
    }
}
