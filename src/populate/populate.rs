use std::fs;
use std::path::PathBuf;

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::BestEffortPathExt;
use crate::tree::{Node, StatError};

/// Recursively builds the tree of real filesystem entries under the
/// node's path.
///
/// Every directory entry becomes one child node bound to the joined
/// path; the listing order of the filesystem is taken as insertion
/// order. File nodes are not expanded. You basically always want to
/// run this right after creating a tree bound to a real path, e.g.
/// `Node::new(root).try_pipe(populate)?`.
pub fn populate(node: &Node) -> Result<(), PopulateError> {
    if !node.is_directory().context(KindSnafu)? {
        return Ok(());
    }

    let path = node.path();
    let entries = fs::read_dir(&path).context(ListDirSnafu { path: path.clone() })?;

    let mut entry_count = 0;
    for entry in entries {
        let entry = entry.context(ListDirSnafu { path: path.clone() })?;
        let child = Node::new(entry.path());
        node.add_child(child.clone());
        populate(&child)?;
        entry_count += 1;
    }
    debug!(
        "Populated {} entries under '{}'",
        entry_count,
        path.display()
    );

    Ok(())
}

#[derive(Debug, Snafu)]
pub enum PopulateError {
    #[snafu(display("Failed to resolve the kind of a node while populating"))]
    KindError { source: StatError },
    #[snafu(display("Failed to list directory '{}'", path.best_effort_path_display()))]
    ListDirError {
        path: PathBuf,
        source: std::io::Error,
    },
}
