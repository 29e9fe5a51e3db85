//! In-memory tree mirroring a filesystem subtree.
//!
//! Nodes represent one filesystem path each, resolve their kind and
//! contents lazily against the real filesystem, and own an ordered
//! sequence of children. Structural mutation (adding and removing
//! children) is what the traversal engine in [`crate::walk`] is built
//! around.

mod node;

pub use node::{ContentsError, NoParentError, Node, NodeKind, StatError};
