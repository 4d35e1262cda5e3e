//! JSON manifest adapter

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::AssetCatalog;
use crate::timestamp::OriginTimestamp;

/// Errors raised while loading a catalog manifest
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Manifest could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest is not valid JSON of the expected shape
    #[error("Malformed manifest: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Manifest declares an empty namespace root
    #[error("Manifest namespace root is empty")]
    EmptyNamespaceRoot,

    /// Manifest lists the same resource key twice
    #[error("Duplicate resource key: {0}")]
    DuplicateResource(String),
}

/// On-disk manifest shape
#[derive(Debug, Deserialize)]
struct Manifest {
    namespace_root: String,
    #[serde(default)]
    origin_modified_at: OriginTimestamp,
    resources: Vec<String>,
}

/// Catalog loaded from a JSON manifest
///
/// The manifest carries the namespace root, an optional origin timestamp and
/// the flat resource list:
///
/// ```json
/// {
///   "namespace_root": "App",
///   "origin_modified_at": 1700000000000000000,
///   "resources": ["App.Readme.txt", "App.Assets.Logo.png"]
/// }
/// ```
///
/// Unlike [`StaticCatalog`](crate::StaticCatalog), a duplicate key is treated
/// as a malformed manifest and rejected.
#[derive(Debug, Clone)]
pub struct ManifestCatalog {
    namespace_root: String,
    names: Vec<String>,
    index: HashSet<String>,
    origin: OriginTimestamp,
}

impl ManifestCatalog {
    /// Loads a catalog from manifest JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::validate(serde_json::from_str(json)?)
    }

    /// Loads a catalog from manifest JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        Self::validate(serde_json::from_slice(bytes)?)
    }

    /// Loads a catalog from a manifest file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    fn validate(manifest: Manifest) -> Result<Self, CatalogError> {
        if manifest.namespace_root.is_empty() {
            return Err(CatalogError::EmptyNamespaceRoot);
        }

        let mut index = HashSet::with_capacity(manifest.resources.len());
        for key in &manifest.resources {
            if !index.insert(key.clone()) {
                return Err(CatalogError::DuplicateResource(key.clone()));
            }
        }

        Ok(Self {
            namespace_root: manifest.namespace_root,
            names: manifest.resources,
            index,
            origin: manifest.origin_modified_at,
        })
    }
}

impl AssetCatalog for ManifestCatalog {
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
