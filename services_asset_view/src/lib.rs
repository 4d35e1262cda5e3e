//! # Asset View Service
//!
//! This service builds immutable asset views over flat resource catalogs.
//!
//! ## Philosophy
//!
//! Construction is synchronous and total: one pass over the catalog listing,
//! no I/O beyond catalog lookups, no partial trees. Misconfiguration fails
//! fast; an individual resource that cannot be confirmed against the catalog
//! is reported to the diagnostic sink and omitted, never fatal.
//!
//! ## Operations
//!
//! - `ViewBuilder::new()`: start configuring a construction pass
//! - `with_catalog(..)`, `with_root_name(..)`, `with_separator(..)`,
//!   `with_diagnostics(..)`: builder-style configuration
//! - `build()`: produce an immutable [`asset_view::AssetTree`]

pub mod builder;

pub use builder::{BuildError, ViewBuilder};
