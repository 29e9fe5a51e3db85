#![allow(clippy::enum_variant_names)]

//! An in-memory tree mirroring a filesystem subtree, with composable
//! traversal, matching, and bulk-mutation operations.
//!
//! A tree is populated from a real directory, shaped in memory with
//! walks and matchers, and optionally written back out under a fresh
//! root:
//!
//! ```no_run
//! use sylva::{Node, populate, materialize};
//! # use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tree = Node::new("assets").try_pipe(populate)?;
//! materialize(&tree, Path::new("build"))?;
//! # Ok(())
//! # }
//! ```
//!
//! Everything is single-threaded and synchronous; handles are
//! `Rc`-based and intentionally not `Send`.

pub mod ext;
pub mod matcher;
pub mod materialize;
pub mod populate;
pub mod render;
pub mod tree;
pub mod walk;

pub use matcher::Matcher;
pub use materialize::{MaterializeError, materialize};
pub use populate::{PopulateError, populate};
pub use render::render;
pub use tree::{ContentsError, NoParentError, Node, NodeKind, StatError};
pub use walk::{WalkOrder, post_order, pre_order, try_pre_order};
