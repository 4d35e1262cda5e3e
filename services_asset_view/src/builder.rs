//! View construction
//!
//! This module builds an [`AssetTree`] from a backing catalog: canonicalize
//! the raw keys, classify names as files or directory members, group members
//! by first token and recurse, confirming every file against the catalog
//! before it is admitted.

use std::collections::HashMap;
use std::sync::Arc;

use asset_catalog::AssetCatalog;
use asset_diagnostics::{DiagnosticEvent, DiagnosticSink, NullSink};
use asset_view::{
    AssetTree, DirectoryId, DirectoryNode, FileEntry, ResourceNames, DEFAULT_PATH_SEPARATOR,
    NAMESPACE_DELIMITER,
};
use thiserror::Error;

/// Errors raised when a construction pass is misconfigured
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// No backing catalog was supplied
    #[error("Backing catalog is required")]
    MissingCatalog,

    /// A directory cannot be built with an empty name
    #[error("Directory name is empty")]
    EmptyDirectoryName,
}

/// Configures and runs view construction
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use asset_catalog::StaticCatalog;
/// use services_asset_view::ViewBuilder;
///
/// let catalog = Arc::new(
///     StaticCatalog::new("App")
///         .with_resource("App.Readme.txt")
///         .with_resource("App.Assets.Logo.png"),
/// );
///
/// let tree = ViewBuilder::new().with_catalog(catalog).build().unwrap();
/// let root = tree.root();
///
/// assert!(root.find_file("Readme.txt").is_some());
/// assert!(root.find_directory("Assets").is_some());
/// ```
pub struct ViewBuilder {
    catalog: Option<Arc<dyn AssetCatalog>>,
    root_name: Option<String>,
    separator: char,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl ViewBuilder {
    /// Creates a builder with the default separator and a null sink
    pub fn new() -> Self {
        Self {
            catalog: None,
            root_name: None,
            separator: DEFAULT_PATH_SEPARATOR,
            diagnostics: Arc::new(NullSink),
        }
    }

    /// Sets the backing catalog
    pub fn with_catalog(mut self, catalog: Arc<dyn AssetCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Overrides the root directory name
    ///
    /// Defaults to the catalog's namespace root. The name heads every
    /// root-relative real path, so an override that no longer matches the
    /// catalog's key prefix will leave files unresolvable.
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = Some(name.into());
        self
    }

    /// Sets the real-path separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the diagnostic sink
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Runs construction and returns the immutable tree
    ///
    /// Fails fast when no catalog was supplied or the root name is empty.
    /// Individual unresolvable resources never fail the build; each is
    /// reported to the diagnostic sink and omitted.
    pub fn build(self) -> Result<AssetTree, BuildError> {
        let ViewBuilder {
            catalog,
            root_name,
            separator,
            diagnostics,
        } = self;

        let catalog = catalog.ok_or(BuildError::MissingCatalog)?;
        let root_name = root_name.unwrap_or_else(|| catalog.namespace_root().to_string());
        let raw_names = catalog.resource_names();

        let mut assembler = TreeAssembler {
            catalog: &*catalog,
            diagnostics: &*diagnostics,
            namespace_root: catalog.namespace_root().to_string(),
            separator,
            nodes: HashMap::new(),
        };
        let (root, root_node) = assembler.assemble(None, None, &root_name, raw_names)?;
        let descendants = assembler.nodes;

        Ok(AssetTree::new(root, root_node, descendants, catalog, separator))
    }
}

impl Default for ViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One construction pass over a catalog listing
struct TreeAssembler<'a> {
    catalog: &'a dyn AssetCatalog,
    diagnostics: &'a dyn DiagnosticSink,
    namespace_root: String,
    separator: char,
    nodes: HashMap<DirectoryId, DirectoryNode>,
}

impl TreeAssembler<'_> {
    /// Builds the directory for `raw_names` and, recursively, its subtree.
    /// The finished record is handed back to the caller; descendants land in
    /// the shared table as each recursion returns.
    fn assemble(
        &mut self,
        parent: Option<DirectoryId>,
        parent_path: Option<&str>,
        name: &str,
        raw_names: Vec<String>,
    ) -> Result<(DirectoryId, DirectoryNode), BuildError> {
        if name.is_empty() {
            return Err(BuildError::EmptyDirectoryName);
        }

        let id = DirectoryId::new();
        let real_path = match parent_path {
            Some(parent_path) => format!("{}{}{}", parent_path, self.separator, name),
            None => name.to_string(),
        };

        let canonical: Vec<String> = raw_names
            .iter()
            .map(|raw| ResourceNames::canonicalize(raw, &self.namespace_root))
            .collect();
        let (file_names, member_names) = ResourceNames::partition(canonical);

        let mut node = DirectoryNode::new(name, parent);

        for file_name in file_names {
            // A raw key equal to the namespace root (or all delimiters)
            // canonicalizes to nothing; its delimited candidate would collapse
            // back to the bare root and admit a file with an empty name.
            if file_name.is_empty() {
                self.diagnostics.record(
                    DiagnosticEvent::warn("empty resource name")
                        .with_field("directory", real_path.as_str()),
                );
                continue;
            }

            let candidate = format!("{}{}{}", real_path, self.separator, file_name);
            match self.resolve_file(&candidate) {
                Some(resolved_key) => {
                    node.add_file(FileEntry::new(file_name, resolved_key, id));
                }
                None => {
                    self.diagnostics.record(
                        DiagnosticEvent::warn("virtual file not found")
                            .with_field("resource", candidate.as_str())
                            .with_field("directory", real_path.as_str()),
                    );
                }
            }
        }

        for (child_name, remainders) in ResourceNames::group_by_first_token(member_names) {
            let (child_id, child_node) =
                self.assemble(Some(id), Some(&real_path), &child_name, remainders)?;
            node.add_directory(child_name, child_id);
            self.nodes.insert(child_id, child_node);
        }

        Ok((id, node))
    }

    /// Probes the catalog for a file's key: the separator-joined form first,
    /// then that form with separators replaced by the namespace delimiter and
    /// stray delimiters trimmed
    fn resolve_file(&self, separated: &str) -> Option<String> {
        if self.catalog.contains(separated) {
            return Some(separated.to_string());
        }

        let delimited = separated
            .replace(self.separator, &NAMESPACE_DELIMITER.to_string())
            .trim_matches(NAMESPACE_DELIMITER)
            .to_string();
        if self.catalog.contains(&delimited) {
            return Some(delimited);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset_catalog::{OriginTimestamp, StaticCatalog};
    use asset_diagnostics::{DiagnosticLevel, RecordingSink};

    fn build_from(catalog: StaticCatalog) -> AssetTree {
        ViewBuilder::new()
            .with_catalog(Arc::new(catalog))
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_requires_catalog() {
        let result = ViewBuilder::new().build();
        assert_eq!(result.unwrap_err(), BuildError::MissingCatalog);
    }

    #[test]
    fn test_build_rejects_empty_root_name() {
        let catalog: Arc<dyn AssetCatalog> = Arc::new(StaticCatalog::new("App"));

        let overridden = ViewBuilder::new()
            .with_catalog(catalog.clone())
            .with_root_name("")
            .build();
        assert_eq!(overridden.unwrap_err(), BuildError::EmptyDirectoryName);

        let defaulted = ViewBuilder::new()
            .with_catalog(Arc::new(StaticCatalog::new("")))
            .build();
        assert_eq!(defaulted.unwrap_err(), BuildError::EmptyDirectoryName);
    }

    #[test]
    fn test_empty_catalog_builds_empty_root() {
        let tree = build_from(StaticCatalog::new("App"));
        let root = tree.root();

        assert_eq!(root.name(), "App");
        assert_eq!(root.file_count(), 0);
        assert_eq!(root.directory_count(), 0);
        assert_eq!(root.nodes().count(), 0);
    }

    #[test]
    fn test_single_level_files() {
        let tree = build_from(
            StaticCatalog::new("App")
                .with_resource("App.Readme.txt")
                .with_resource("App.License"),
        );
        let root = tree.root();

        let names: Vec<&str> = root.files().map(|f| f.name()).collect();
        assert_eq!(names, vec!["License", "Readme.txt"]);
        assert_eq!(root.directory_count(), 0);
    }

    #[test]
    fn test_nested_directories() {
        let tree = build_from(
            StaticCatalog::new("App")
                .with_resource("App.Assets.Images.Logo.png")
                .with_resource("App.Assets.Images.Icons.Save.png")
                .with_resource("App.Assets.Readme.txt"),
        );

        let assets = tree.root().find_directory("Assets").unwrap();
        assert!(assets.find_file("Readme.txt").is_some());

        let images = assets.find_directory("Images").unwrap();
        let logo = images.find_file("Logo.png").unwrap();
        assert_eq!(logo.resolved_key(), "App.Assets.Images.Logo.png");

        let icons = images.find_directory("Icons").unwrap();
        assert_eq!(
            icons.find_file("Save.png").unwrap().resolved_key(),
            "App.Assets.Images.Icons.Save.png"
        );
    }

    #[test]
    fn test_bare_token_key_becomes_file_beside_directory() {
        let tree = build_from(
            StaticCatalog::new("App")
                .with_resource("App.Assets")
                .with_resource("App.Assets.Logo.png"),
        );
        let root = tree.root();

        let file = root.find_file("Assets").unwrap();
        assert_eq!(file.resolved_key(), "App.Assets");

        let dir = root.find_directory("Assets").unwrap();
        assert!(dir.find_file("Logo.png").is_some());
    }

    #[test]
    fn test_resolver_prefers_separated_form() {
        let sink = Arc::new(RecordingSink::new());
        let catalog = StaticCatalog::new("App")
            .with_resource("App.Readme.txt")
            .with_resource("App/Readme.txt");

        let tree = ViewBuilder::new()
            .with_catalog(Arc::new(catalog))
            .with_diagnostics(sink.clone())
            .build()
            .unwrap();

        let readme = tree.root().find_file("Readme.txt").unwrap();
        assert_eq!(readme.resolved_key(), "App/Readme.txt");

        // The slash key also shapes one junk name that resolves nowhere.
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_dot_separator_resolves_directly() {
        let catalog = StaticCatalog::new("App").with_resource("App.Assets.Logo.png");
        let tree = ViewBuilder::new()
            .with_catalog(Arc::new(catalog))
            .with_separator(NAMESPACE_DELIMITER)
            .build()
            .unwrap();

        let logo = tree
            .root()
            .find_directory("Assets")
            .unwrap()
            .find_file("Logo.png")
            .unwrap();
        assert_eq!(logo.resolved_key(), "App.Assets.Logo.png");
        assert_eq!(logo.real_path(), "App.Assets.Logo.png");
    }

    #[test]
    fn test_foreign_namespace_key_is_omitted_with_warning() {
        let sink = Arc::new(RecordingSink::new());
        let catalog = StaticCatalog::new("App")
            .with_resource("App.Readme.txt")
            .with_resource("Other.Notes.txt");

        let tree = ViewBuilder::new()
            .with_catalog(Arc::new(catalog))
            .with_diagnostics(sink.clone())
            .build()
            .unwrap();

        let other = tree.root().find_directory("Other").unwrap();
        assert_eq!(other.file_count(), 0);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, DiagnosticLevel::Warn);
        assert_eq!(events[0].message, "virtual file not found");
        assert_eq!(events[0].field("resource"), Some("App/Other/Notes.txt"));
        assert_eq!(events[0].field("directory"), Some("App/Other"));
    }

    #[test]
    fn test_root_name_override() {
        let catalog = StaticCatalog::new("App").with_resource("App.Readme.txt");
        let tree = ViewBuilder::new()
            .with_catalog(Arc::new(catalog))
            .with_root_name("Mounted")
            .build()
            .unwrap();

        assert_eq!(tree.root().name(), "Mounted");
        assert_eq!(tree.root().real_path(), "Mounted");
    }

    #[test]
    fn test_duplicate_canonical_names_keep_first_resolution() {
        // Both keys canonicalize to the file name "Readme.txt" at the root.
        let catalog = StaticCatalog::new("App")
            .with_resource("App.Readme.txt")
            .with_resource("App..Readme.txt");

        let tree = build_from(catalog);
        assert_eq!(tree.root().file_count(), 1);
        assert_eq!(
            tree.root().find_file("Readme.txt").unwrap().resolved_key(),
            "App.Readme.txt"
        );
    }

    #[test]
    fn test_bare_root_key_is_skipped_with_warning() {
        let sink = Arc::new(RecordingSink::new());
        // "App" canonicalizes to an empty name; its delimited candidate would
        // collapse back to "App" and resolve.
        let catalog = StaticCatalog::new("App")
            .with_resource("App")
            .with_resource("App.Readme.txt");

        let tree = ViewBuilder::new()
            .with_catalog(Arc::new(catalog))
            .with_diagnostics(sink.clone())
            .build()
            .unwrap();
        let root = tree.root();

        assert_eq!(root.file_count(), 1);
        assert!(root.find_file("").is_none());
        assert!(root.find_file("Readme.txt").is_some());

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, DiagnosticLevel::Warn);
        assert_eq!(events[0].message, "empty resource name");
        assert_eq!(events[0].field("directory"), Some("App"));
    }

    #[test]
    fn test_all_delimiter_key_is_skipped_with_warning() {
        let sink = Arc::new(RecordingSink::new());
        let catalog = StaticCatalog::new("App").with_resource("App...");

        let tree = ViewBuilder::new()
            .with_catalog(Arc::new(catalog))
            .with_diagnostics(sink.clone())
            .build()
            .unwrap();

        assert_eq!(tree.root().file_count(), 0);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.events()[0].message, "empty resource name");
    }

    #[test]
    fn test_origin_timestamp_carried_into_tree() {
        let catalog = StaticCatalog::new("App")
            .with_resource("App.Readme.txt")
            .with_origin(OriginTimestamp::from_nanos(123));

        let tree = build_from(catalog);
        assert_eq!(tree.origin_modified_at(), OriginTimestamp::from_nanos(123));
        assert_eq!(
            tree.root().find_file("Readme.txt").unwrap().modified_at(),
            OriginTimestamp::from_nanos(123)
        );
    }
}
