use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pathdiff::diff_paths;
use snafu::{OptionExt, ResultExt, Snafu};
use tracing::{debug, info};

use crate::ext::BestEffortPathExt;
use crate::tree::{ContentsError, Node, StatError};
use crate::walk;

/// Writes the tree under a freshly created destination root,
/// preserving each node's path relative to the tree's own root.
///
/// The destination must not exist yet; there are no merge semantics,
/// and an existing destination fails before anything is written. The
/// walk is pre-order by necessity: a directory has to exist before the
/// entries under it can be written. A failure partway through leaves
/// the writes made so far in place.
pub fn materialize(node: &Node, destination: &Path) -> Result<(), MaterializeError> {
    match fs::create_dir(destination) {
        Err(source) if source.kind() == io::ErrorKind::AlreadyExists => {
            return AlreadyExistsSnafu {
                path: destination.to_path_buf(),
            }
            .fail();
        }
        other => other.context(CreateDirSnafu {
            path: destination.to_path_buf(),
        })?,
    }

    let root = node.path();
    info!(
        "Materializing '{}' under '{}'",
        root.display(),
        destination.display()
    );

    walk::try_pre_order(node, &mut |item| {
        let path = item.path();
        let relative = diff_paths(&path, &root).context(RelativePathSnafu {
            path: path.clone(),
            root: root.clone(),
        })?;
        let target = destination.join(relative);

        if item.is_directory().context(KindSnafu)? {
            debug!("Creating directory '{}'", target.display());
            fs::create_dir(&target).context(CreateDirSnafu {
                path: target.clone(),
            })?;
        } else {
            debug!("Writing file '{}'", target.display());
            let bytes = item.contents().context(ContentsSnafu)?;
            fs::write(&target, bytes).context(WriteFileSnafu {
                path: target.clone(),
            })?;
        }

        Ok(())
    })
}

#[derive(Debug, Snafu)]
pub enum MaterializeError {
    #[snafu(display("Destination '{}' already exists", path.best_effort_path_display()))]
    AlreadyExistsError { path: PathBuf },
    #[snafu(display("Failed to create directory '{}'", path.best_effort_path_display()))]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write file '{}'", path.best_effort_path_display()))]
    WriteFileError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to resolve a node kind while materializing"))]
    KindError { source: StatError },
    #[snafu(display("Failed to resolve node contents while materializing"))]
    ContentsError { source: ContentsError },
    #[snafu(display(
        "Node path '{}' cannot be expressed relative to the tree root '{}'",
        path.display(),
        root.display()
    ))]
    RelativePathError { path: PathBuf, root: PathBuf },
}
