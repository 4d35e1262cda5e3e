//! The built view: a node table plus borrowing read handles
//!
//! [`AssetTree`] owns every directory record and the shared catalog
//! reference. [`DirectoryHandle`] and [`FileHandle`] borrow the tree and
//! carry the lookup, listing and matching operations; [`VirtualNode`] is the
//! combined enumeration item.

use core::fmt;
use std::collections::HashMap;
use std::sync::Arc;

use asset_catalog::{AssetCatalog, OriginTimestamp};

use crate::glob;
use crate::node::{DirectoryId, DirectoryNode, FileEntry};

/// Default separator for root-relative real paths
pub const DEFAULT_PATH_SEPARATOR: char = '/';

/// An immutable directory tree over a flat resource catalog
///
/// Assembled once by the construction service; no mutation API exists
/// afterwards, so a shared tree can be read from several threads without
/// synchronization. The constructor registers the root record itself, so
/// [`AssetTree::root`] cannot miss; child and parent IDs are resolved through
/// [`AssetTree::directory`], which treats a dangling ID as absent.
#[derive(Clone)]
pub struct AssetTree {
    nodes: HashMap<DirectoryId, DirectoryNode>,
    root: DirectoryId,
    catalog: Arc<dyn AssetCatalog>,
    separator: char,
}

impl AssetTree {
    /// Assembles a tree from the root record and the table of its descendants
    pub fn new(
        root: DirectoryId,
        root_node: DirectoryNode,
        descendants: HashMap<DirectoryId, DirectoryNode>,
        catalog: Arc<dyn AssetCatalog>,
        separator: char,
    ) -> Self {
        let mut nodes = descendants;
        nodes.insert(root, root_node);
        Self {
            nodes,
            root,
            catalog,
            separator,
        }
    }

    /// Returns the root directory
    pub fn root(&self) -> DirectoryHandle<'_> {
        self.directory(self.root)
            .expect("constructor registers the root record")
    }

    /// Returns a directory by ID
    pub fn directory(&self, id: DirectoryId) -> Option<DirectoryHandle<'_>> {
        self.nodes
            .get(&id)
            .map(|node| DirectoryHandle { tree: self, id, node })
    }

    /// Returns the backing catalog
    pub fn catalog(&self) -> &dyn AssetCatalog {
        self.catalog.as_ref()
    }

    /// Returns the modification timestamp of the catalog's physical origin
    ///
    /// Every node of the tree reports this single value.
    pub fn origin_modified_at(&self) -> OriginTimestamp {
        self.catalog.origin_modified_at()
    }

    /// Returns the real-path separator
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Counts the directories in the tree
    pub fn directory_count(&self) -> usize {
        self.nodes.len()
    }

    fn real_path_of(&self, id: DirectoryId) -> String {
        let mut names: Vec<&str> = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current.and_then(|id| self.nodes.get(&id)) {
            names.push(node.name());
            current = node.parent();
        }
        names.reverse();
        names.join(&self.separator.to_string())
    }
}

impl fmt::Debug for AssetTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetTree")
            .field("root", &self.root)
            .field("directory_count", &self.nodes.len())
            .field("separator", &self.separator)
            .finish()
    }
}

/// Borrowing handle to one directory of a tree
#[derive(Clone, Copy)]
pub struct DirectoryHandle<'a> {
    tree: &'a AssetTree,
    id: DirectoryId,
    node: &'a DirectoryNode,
}

impl<'a> DirectoryHandle<'a> {
    /// Returns the directory ID
    pub fn id(&self) -> DirectoryId {
        self.id
    }

    /// Returns the directory name
    pub fn name(&self) -> &'a str {
        self.node.name()
    }

    /// Returns the owning directory, or None at the root
    pub fn parent(&self) -> Option<DirectoryHandle<'a>> {
        self.node.parent().and_then(|id| self.tree.directory(id))
    }

    /// Returns the root-relative real path (ancestor names joined on the
    /// tree separator, root name first, no leading separator)
    pub fn real_path(&self) -> String {
        self.tree.real_path_of(self.id)
    }

    /// Returns the modification timestamp of the catalog's physical origin
    pub fn modified_at(&self) -> OriginTimestamp {
        self.tree.origin_modified_at()
    }

    /// Lists files in ascending name order
    pub fn files(&self) -> impl Iterator<Item = FileHandle<'a>> + 'a {
        let tree = self.tree;
        self.node.files().map(move |entry| FileHandle { tree, entry })
    }

    /// Lists child directories in ascending name order
    pub fn directories(&self) -> impl Iterator<Item = DirectoryHandle<'a>> + 'a {
        let tree = self.tree;
        self.node
            .directories()
            .filter_map(move |(_, id)| tree.directory(*id))
    }

    /// Finds a file by exact name
    pub fn find_file(&self, name: &str) -> Option<FileHandle<'a>> {
        let tree = self.tree;
        self.node.get_file(name).map(|entry| FileHandle { tree, entry })
    }

    /// Finds a child directory by exact name
    pub fn find_directory(&self, name: &str) -> Option<DirectoryHandle<'a>> {
        self.node
            .get_directory(name)
            .and_then(|id| self.tree.directory(id))
    }

    /// Lazily yields the files whose name matches a glob pattern
    ///
    /// The pattern applies to file names only, never to paths; `*` and `?`
    /// are the only special characters.
    pub fn files_matching(&self, pattern: &str) -> impl Iterator<Item = FileHandle<'a>> + 'a {
        let pattern = pattern.to_string();
        self.files()
            .filter(move |file| glob::matches(&pattern, file.name()))
    }

    /// Lazily yields every child node, directories first, then files, each
    /// group in ascending name order
    ///
    /// Each call starts a fresh enumeration.
    pub fn nodes(&self) -> impl Iterator<Item = VirtualNode<'a>> + 'a {
        self.directories()
            .map(VirtualNode::Directory)
            .chain(self.files().map(VirtualNode::File))
    }

    /// Counts child directories
    pub fn directory_count(&self) -> usize {
        self.node.directory_count()
    }

    /// Counts files
    pub fn file_count(&self) -> usize {
        self.node.file_count()
    }
}

impl fmt::Debug for DirectoryHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryHandle")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}

/// Borrowing handle to one file of a tree
#[derive(Clone, Copy)]
pub struct FileHandle<'a> {
    tree: &'a AssetTree,
    entry: &'a FileEntry,
}

impl<'a> FileHandle<'a> {
    /// Returns the file name
    pub fn name(&self) -> &'a str {
        &self.entry.name
    }

    /// Returns the confirmed catalog key
    ///
    /// This is the value a byte-retrieval layer hands back to the catalog's
    /// backing store.
    pub fn resolved_key(&self) -> &'a str {
        &self.entry.resolved_key
    }

    /// Returns the owning directory
    pub fn parent(&self) -> Option<DirectoryHandle<'a>> {
        self.tree.directory(self.entry.parent)
    }

    /// Returns the root-relative real path (owning directory path, the tree
    /// separator, then the file name)
    pub fn real_path(&self) -> String {
        let mut path = self.tree.real_path_of(self.entry.parent);
        path.push(self.tree.separator);
        path.push_str(&self.entry.name);
        path
    }

    /// Returns the modification timestamp of the catalog's physical origin
    pub fn modified_at(&self) -> OriginTimestamp {
        self.tree.origin_modified_at()
    }
}

impl fmt::Debug for FileHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name())
            .field("resolved_key", &self.resolved_key())
            .finish()
    }
}

/// A directory or file under one enumeration item type
#[derive(Debug, Clone, Copy)]
pub enum VirtualNode<'a> {
    /// A directory
    Directory(DirectoryHandle<'a>),
    /// A file
    File(FileHandle<'a>),
}

impl<'a> VirtualNode<'a> {
    /// Returns the node name
    pub fn name(&self) -> &'a str {
        match self {
            VirtualNode::Directory(dir) => dir.name(),
            VirtualNode::File(file) => file.name(),
        }
    }

    /// Returns the root-relative real path
    pub fn real_path(&self) -> String {
        match self {
            VirtualNode::Directory(dir) => dir.real_path(),
            VirtualNode::File(file) => file.real_path(),
        }
    }

    /// Returns the modification timestamp of the catalog's physical origin
    pub fn modified_at(&self) -> OriginTimestamp {
        match self {
            VirtualNode::Directory(dir) => dir.modified_at(),
            VirtualNode::File(file) => file.modified_at(),
        }
    }

    /// Returns true for directories
    pub fn is_directory(&self) -> bool {
        matches!(self, VirtualNode::Directory(_))
    }

    /// Returns the directory handle, if this node is a directory
    pub fn as_directory(&self) -> Option<DirectoryHandle<'a>> {
        match self {
            VirtualNode::Directory(dir) => Some(*dir),
            VirtualNode::File(_) => None,
        }
    }

    /// Returns the file handle, if this node is a file
    pub fn as_file(&self) -> Option<FileHandle<'a>> {
        match self {
            VirtualNode::Directory(_) => None,
            VirtualNode::File(file) => Some(*file),
        }
    }
}
