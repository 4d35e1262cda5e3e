//! # Asset Catalog
//!
//! This crate defines the backing-store boundary of the asset view: a flat,
//! read-only catalog of namespaced resource keys.
//!
//! ## Philosophy
//!
//! The view never owns resource bytes or knows where keys come from. It is
//! handed a catalog capability: point existence lookup, a flat key listing,
//! the namespace root of the key space and one origin timestamp. Adapters
//! decide what actually backs those answers:
//! - **StaticCatalog**: keys supplied directly, for fixtures and embedded sets
//! - **ManifestCatalog**: keys loaded from a JSON manifest

pub mod catalog;
pub mod manifest;
pub mod timestamp;

pub use catalog::{AssetCatalog, StaticCatalog};
pub use manifest::{CatalogError, ManifestCatalog};
pub use timestamp::OriginTimestamp;
