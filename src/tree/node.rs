use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::{Rc, Weak};

use derive_more::{Display, IsVariant};
use snafu::{OptionExt, ResultExt, Snafu};

use crate::ext::BestEffortPathExt;
use crate::matcher::Matcher;
use crate::walk::{self, WalkOrder};

/// What a node stands for on the filesystem.
///
/// Resolved at most once per node; after that the node never consults
/// the filesystem again, even if the entry changed underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum NodeKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
}

#[derive(Debug)]
struct NodeInner {
    path: PathBuf,
    parent: Weak<RefCell<NodeInner>>,
    children: Vec<Node>,
    kind: Option<NodeKind>,
    contents: Option<Vec<u8>>,
}

/// A node of an in-memory filesystem tree.
///
/// `Node` is a cheap-to-clone handle; clones refer to the same
/// underlying node, which is what lets a walk visitor mutate the tree
/// it is walking. Ownership flows strictly parent to children; the
/// back-reference to the parent is weak and never keeps a parent
/// alive.
#[derive(Debug, Clone)]
pub struct Node {
    inner: Rc<RefCell<NodeInner>>,
}

impl Node {
    /// Creates a root node bound to `path`, with kind and contents
    /// unresolved.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::build(path.into(), None)
    }

    /// Creates a node with its kind supplied up front, for trees that
    /// are not backed by the real filesystem.
    pub fn with_kind(path: impl Into<PathBuf>, kind: NodeKind) -> Self {
        Self::build(path.into(), Some(kind))
    }

    fn build(path: PathBuf, kind: Option<NodeKind>) -> Self {
        Node {
            inner: Rc::new(RefCell::new(NodeInner {
                path,
                parent: Weak::new(),
                children: Vec::new(),
                kind,
                contents: None,
            })),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.inner.borrow().path.clone()
    }

    /// Replaces the path string. No validation, no filesystem side
    /// effect, and no effect on an already resolved kind or contents.
    pub fn set_path(&self, path: impl Into<PathBuf>) {
        self.inner.borrow_mut().path = path.into();
    }

    /// The final path component, lossily converted. The unit matchers
    /// and the renderer operate on.
    pub fn base_name(&self) -> String {
        let inner = self.inner.borrow();
        inner
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The cached kind, without triggering resolution.
    pub fn kind(&self) -> Option<NodeKind> {
        self.inner.borrow().kind
    }

    /// Whether this node is a directory. The first call stats the path
    /// and caches the answer; later calls are pure reads.
    pub fn is_directory(&self) -> Result<bool, StatError> {
        Ok(self.resolve_kind()?.is_directory())
    }

    /// Whether this node is a file. Mutually exclusive with
    /// [`Node::is_directory`].
    pub fn is_file(&self) -> Result<bool, StatError> {
        Ok(self.resolve_kind()?.is_file())
    }

    fn resolve_kind(&self) -> Result<NodeKind, StatError> {
        if let Some(kind) = self.inner.borrow().kind {
            return Ok(kind);
        }

        let path = self.path();
        let metadata = fs::metadata(&path).context(StatSnafu { path: path.clone() })?;
        let kind = if metadata.is_dir() {
            NodeKind::Directory
        } else {
            NodeKind::File
        };
        self.inner.borrow_mut().kind = Some(kind);

        Ok(kind)
    }

    pub fn parent(&self) -> Option<Node> {
        self.inner
            .borrow()
            .parent
            .upgrade()
            .map(|inner| Node { inner })
    }

    pub fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    /// The children in insertion order, as a snapshot of handles into
    /// the live sequence.
    pub fn children(&self) -> Vec<Node> {
        self.inner.borrow().children.clone()
    }

    pub fn has_children(&self) -> bool {
        !self.inner.borrow().children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// The child at `index` in the live sequence, if it still exists.
    pub fn child(&self, index: usize) -> Option<Node> {
        self.inner.borrow().children.get(index).cloned()
    }

    /// Appends `child` to the children sequence and makes this node its
    /// parent. This is the only place the parent/child link is
    /// established; the supplied node must not already have a parent.
    pub fn add_child(&self, child: Node) {
        child.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().children.push(child);
    }

    /// The node's byte contents. The first call on a file reads and
    /// caches them; later calls return the cached bytes even if the
    /// on-disk file changed. Directories have no contents.
    pub fn contents(&self) -> Result<Vec<u8>, ContentsError> {
        let kind = self.resolve_kind().context(KindSnafu)?;
        let path = self.path();
        if kind.is_directory() {
            return NotAFileSnafu { path }.fail();
        }

        if let Some(bytes) = self.inner.borrow().contents.as_ref() {
            return Ok(bytes.clone());
        }

        let bytes = fs::read(&path).context(ReadSnafu { path: path.clone() })?;
        self.inner.borrow_mut().contents = Some(bytes.clone());

        Ok(bytes)
    }

    /// Overrides the contents, marking them resolved so the file is
    /// never read from disk afterwards. Accepts bytes or strings.
    pub fn set_contents(&self, contents: impl AsRef<[u8]>) -> Result<(), ContentsError> {
        let kind = self.resolve_kind().context(KindSnafu)?;
        if kind.is_directory() {
            return NotAFileSnafu { path: self.path() }.fail();
        }

        self.inner.borrow_mut().contents = Some(contents.as_ref().to_vec());

        Ok(())
    }

    /// Detaches this node: removes it from its parent's children (first
    /// occurrence by handle identity) and clears the parent link. Roots
    /// cannot be removed.
    pub fn remove(&self) -> Result<(), NoParentError> {
        let parent = self
            .parent()
            .context(NoParentSnafu { path: self.path() })?;

        self.inner.borrow_mut().parent = Weak::new();

        let mut parent_inner = parent.inner.borrow_mut();
        if let Some(index) = parent_inner
            .children
            .iter()
            .position(|sibling| Rc::ptr_eq(&sibling.inner, &self.inner))
        {
            parent_inner.children.remove(index);
        }

        Ok(())
    }

    /// Applies `plugin` to this node and hands back a handle to it, so
    /// that tree-shaping operations chain.
    pub fn pipe<F>(&self, plugin: F) -> Node
    where
        F: FnOnce(&Node),
    {
        plugin(self);
        self.clone()
    }

    /// Fallible twin of [`Node::pipe`] for plugins that touch the
    /// filesystem: the first error aborts the chain.
    pub fn try_pipe<F, E>(&self, plugin: F) -> Result<Node, E>
    where
        F: FnOnce(&Node) -> Result<(), E>,
    {
        plugin(self)?;
        Ok(self.clone())
    }

    /// Whether this node satisfies `matcher`.
    pub fn matches(&self, matcher: &Matcher) -> bool {
        matcher.is_match(self)
    }

    /// Runs the selected traversal strategy over every descendant of
    /// this node (this node itself is not visited). See [`crate::walk`]
    /// for the removal-safety contract of each order.
    pub fn walk<F>(&self, order: WalkOrder, mut visitor: F)
    where
        F: FnMut(&Node),
    {
        match order {
            WalkOrder::Pre => walk::pre_order(self, &mut visitor),
            WalkOrder::Post => walk::post_order(self, &mut visitor),
        }
    }

    /// This node plus all descendants, flattened in pre-order, for
    /// algorithms that want random access instead of a visitor.
    pub fn flatten(&self) -> Vec<Node> {
        let mut items = vec![self.clone()];
        walk::pre_order(self, &mut |descendant| items.push(descendant.clone()));
        items
    }
}

/// Handle identity: two `Node` values are equal iff they refer to the
/// same underlying node, regardless of path.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Node {}

#[derive(Debug, Snafu)]
#[snafu(display("Failed to resolve the kind of '{}'", path.best_effort_path_display()))]
pub struct StatError {
    path: PathBuf,
    source: std::io::Error,
}

#[derive(Debug, Snafu)]
#[snafu(display("Node '{}' does not have a parent to be removed from", path.best_effort_path_display()))]
pub struct NoParentError {
    path: PathBuf,
}

#[derive(Debug, Snafu)]
pub enum ContentsError {
    #[snafu(display("Failed to resolve the node kind before accessing contents"))]
    KindError { source: StatError },
    #[snafu(display("Cannot access contents of directory '{}'", path.best_effort_path_display()))]
    NotAFileError { path: PathBuf },
    #[snafu(display("Failed to read contents of '{}'", path.best_effort_path_display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}
