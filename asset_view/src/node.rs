//! Tree node records
//!
//! This module defines how directories and files are stored in the node table
//! of a built view. Records are assembled once by the construction service;
//! the read API in [`crate::tree`] never mutates them.

use core::fmt;
use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a directory node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DirectoryId(Uuid);

impl DirectoryId {
    /// Creates a new random directory ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a directory ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DirectoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DirectoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Directory({})", self.0)
    }
}

/// A file entry in a directory
///
/// Exists only for names whose catalog key was confirmed during construction;
/// `resolved_key` is that confirmed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name within its directory
    pub name: String,
    /// Confirmed fully-qualified catalog key
    pub resolved_key: String,
    /// Owning directory
    pub parent: DirectoryId,
}

impl FileEntry {
    /// Creates a new file entry
    pub fn new(
        name: impl Into<String>,
        resolved_key: impl Into<String>,
        parent: DirectoryId,
    ) -> Self {
        Self {
            name: name.into(),
            resolved_key: resolved_key.into(),
            parent,
        }
    }
}

/// A directory node record
///
/// Child directories and files live in separate name-ordered maps, so
/// listings come out sorted and a file may share its name with a
/// subdirectory.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    name: String,
    parent: Option<DirectoryId>,
    directories: BTreeMap<String, DirectoryId>,
    files: BTreeMap<String, FileEntry>,
}

impl DirectoryNode {
    /// Creates an empty directory record
    pub fn new(name: impl Into<String>, parent: Option<DirectoryId>) -> Self {
        Self {
            name: name.into(),
            parent,
            directories: BTreeMap::new(),
            files: BTreeMap::new(),
        }
    }

    /// Returns the directory name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning directory, or None at the root
    pub fn parent(&self) -> Option<DirectoryId> {
        self.parent
    }

    /// Adds a child directory
    ///
    /// Returns true if the child was added, false if the name is taken.
    pub fn add_directory(&mut self, name: impl Into<String>, id: DirectoryId) -> bool {
        let name = name.into();
        if self.directories.contains_key(&name) {
            return false;
        }
        self.directories.insert(name, id);
        true
    }

    /// Adds a file entry
    ///
    /// Returns true if the file was added, false if the name is taken.
    pub fn add_file(&mut self, file: FileEntry) -> bool {
        if self.files.contains_key(&file.name) {
            return false;
        }
        self.files.insert(file.name.clone(), file);
        true
    }

    /// Gets a child directory ID by name
    pub fn get_directory(&self, name: &str) -> Option<DirectoryId> {
        self.directories.get(name).copied()
    }

    /// Gets a file entry by name
    pub fn get_file(&self, name: &str) -> Option<&FileEntry> {
        self.files.get(name)
    }

    /// Iterates child directories in ascending name order
    pub fn directories(&self) -> btree_map::Iter<'_, String, DirectoryId> {
        self.directories.iter()
    }

    /// Iterates file entries in ascending name order
    pub fn files(&self) -> btree_map::Values<'_, String, FileEntry> {
        self.files.values()
    }

    /// Counts child directories
    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    /// Counts files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
