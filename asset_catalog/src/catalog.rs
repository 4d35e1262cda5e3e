//! Catalog capability and the static adapter

use std::collections::HashSet;

use crate::timestamp::OriginTimestamp;

/// Read-only view of a flat resource key space
///
/// A catalog answers four questions: what is the namespace root of its keys,
/// does an exact key exist, what are all the keys, and when was its physical
/// origin last modified. `Send + Sync` is required so one catalog can sit
/// behind a shared reference while several threads read the built view.
pub trait AssetCatalog: Send + Sync {
    /// Returns the namespace root of the key space
    ///
    /// Raw keys are expected (not required) to start with this root followed
    /// by a delimiter, e.g. root `"App"` for key `"App.Assets.Logo.png"`.
    fn namespace_root(&self) -> &str;

    /// Returns true if the exact key exists in the catalog
    fn contains(&self, key: &str) -> bool;

    /// Returns the flat listing of all raw resource keys
    ///
    /// The listing is a snapshot taken at call time; callers must not assume
    /// any particular order.
    fn resource_names(&self) -> Vec<String>;

    /// Returns the modification timestamp of the catalog's physical origin
    fn origin_modified_at(&self) -> OriginTimestamp;
}

/// In-memory catalog built from explicitly supplied keys
///
/// The adapter for embedded key sets and test fixtures. Keys keep their
/// insertion order in `resource_names`; duplicates are dropped on insertion.
///
/// # Example
///
/// ```
/// use asset_catalog::{AssetCatalog, StaticCatalog};
///
/// let catalog = StaticCatalog::new("App")
///     .with_resource("App.Readme.txt")
///     .with_resource("App.Assets.Logo.png");
///
/// assert!(catalog.contains("App.Readme.txt"));
/// assert_eq!(catalog.resource_names().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    namespace_root: String,
    names: Vec<String>,
    index: HashSet<String>,
    origin: OriginTimestamp,
}

impl StaticCatalog {
    /// Creates an empty catalog with the given namespace root
    pub fn new(namespace_root: impl Into<String>) -> Self {
        Self {
            namespace_root: namespace_root.into(),
            names: Vec::new(),
            index: HashSet::new(),
            origin: OriginTimestamp::zero(),
        }
    }

    /// Adds one resource key, keeping the first occurrence on duplicates
    pub fn with_resource(mut self, key: impl Into<String>) -> Self {
        self.insert(key.into());
        self
    }

    /// Adds every resource key from an iterator
    pub fn with_resources<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            self.insert(key.into());
        }
        self
    }

    /// Sets the origin modification timestamp
    pub fn with_origin(mut self, origin: OriginTimestamp) -> Self {
        self.origin = origin;
        self
    }

    /// Returns the number of distinct keys
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the catalog holds no keys
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn insert(&mut self, key: String) {
        if self.index.insert(key.clone()) {
            self.names.push(key);
        }
    }
}

impl AssetCatalog for StaticCatalog {
    fn namespace_root(&self) -> &str {
        &self.namespace_root
    }

    fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    fn resource_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn origin_modified_at(&self) -> OriginTimestamp {
        self.origin
    }
}
