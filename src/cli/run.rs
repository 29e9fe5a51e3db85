use colored::Colorize;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info, warn};

use sylva::render::entries;
use sylva::{
    Matcher, MaterializeError, Node, NodeKind, PopulateError, materialize, populate, post_order,
};

use crate::cli::Cli;

pub fn run(cli_args: Cli) -> Result<(), RunError> {
    let tree = Node::new(cli_args.root)
        .try_pipe(populate)
        .context(PopulateSnafu)?;
    debug!("Populated {} nodes", tree.flatten().len());

    if !cli_args.keep.is_empty() {
        let matcher = Matcher::any(cli_args.keep);
        prune(&tree, &matcher);
    }

    print_tree(&tree);

    if let Some(destination) = cli_args.output {
        materialize(&tree, &destination).context(MaterializeSnafu)?;
        info!("Wrote the tree under '{}'", destination.display());
    }

    Ok(())
}

/// Drops every file node not satisfying `matcher`. Post-order, so
/// removing the just-visited node cannot skip siblings.
fn prune(tree: &Node, matcher: &Matcher) {
    post_order(tree, &mut |node| {
        let keep = matches!(node.kind(), Some(NodeKind::Directory)) || node.matches(matcher);
        if keep {
            return;
        }
        if let Err(error) = node.remove() {
            warn!("Failed to prune '{}': {}", node.base_name(), error);
        }
    });
}

fn print_tree(tree: &Node) {
    let colorize = supports_color::on(supports_color::Stream::Stdout).is_some();

    for entry in entries(tree) {
        let indent = "  ".repeat(entry.depth);
        let name = entry.node.base_name();
        if colorize && matches!(entry.node.kind(), Some(NodeKind::Directory)) {
            println!("{indent}{}", name.blue().bold());
        } else {
            println!("{indent}{name}");
        }
    }
}

#[derive(Debug, Snafu)]
pub enum RunError {
    #[snafu(display("Failed to build the tree from disk"))]
    PopulateError { source: PopulateError },
    #[snafu(display("Failed to write the tree to its destination"))]
    MaterializeError { source: MaterializeError },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Node {
        let root = Node::with_kind("/root", NodeKind::Directory);
        root.add_child(Node::with_kind("/root/keep-me.txt", NodeKind::File));
        let nested = Node::with_kind("/root/nested", NodeKind::Directory);
        nested.add_child(Node::with_kind("/root/nested/drop-me.txt", NodeKind::File));
        nested.add_child(Node::with_kind("/root/nested/also-keep.txt", NodeKind::File));
        root.add_child(nested);
        root
    }

    #[test]
    fn test_prune_drops_files_that_match_nothing() {
        let tree = sample_tree();

        prune(&tree, &Matcher::any(["keep"]));

        let remaining: Vec<String> = tree
            .flatten()
            .iter()
            .map(|node| node.base_name())
            .collect();
        assert_eq!(remaining, vec!["root", "keep-me.txt", "nested", "also-keep.txt"]);
    }

    #[test]
    fn test_prune_keeps_directories_even_when_emptied() {
        let tree = sample_tree();

        prune(&tree, &Matcher::any(["no-file-has-this-name"]));

        let remaining: Vec<String> = tree
            .flatten()
            .iter()
            .map(|node| node.base_name())
            .collect();
        assert_eq!(remaining, vec!["root", "nested"]);
    }
}
