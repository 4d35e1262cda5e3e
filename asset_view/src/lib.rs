//! # Asset View
//!
//! This crate defines the read side of the asset view: an immutable directory
//! tree over a flat, dot-delimited resource key space.
//!
//! ## Philosophy
//!
//! Flat keys like `App.Assets.Images.Logo.png` already encode a hierarchy;
//! this crate gives that hierarchy a directory shape without owning any
//! resource bytes. Construction happens once, in the construction service;
//! everything here is lookup, listing and matching over the finished tree.

pub mod glob;
pub mod names;
pub mod node;
pub mod tree;

pub use names::{ResourceNames, NAMESPACE_DELIMITER};
pub use node::{DirectoryId, DirectoryNode, FileEntry};
pub use tree::{
    AssetTree, DirectoryHandle, FileHandle, VirtualNode, DEFAULT_PATH_SEPARATOR,
};
