//! Resource name scheme
//!
//! This module handles the flat dot-delimited naming convention of resource
//! catalogs: canonicalizing raw keys against a namespace root, classifying
//! names as files or directory members, and grouping members by their first
//! path token.

use std::collections::BTreeMap;

/// Delimiter separating namespace segments in raw resource keys
pub const NAMESPACE_DELIMITER: char = '.';

/// Resource name helpers
///
/// All functions are pure; classification depends only on delimiter counts.
pub struct ResourceNames;

impl ResourceNames {
    /// Canonicalizes a raw catalog key against a namespace root
    ///
    /// Strips the root when the key starts with it, then trims leading
    /// delimiters. Keys outside the root pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_view::ResourceNames;
    ///
    /// assert_eq!(
    ///     ResourceNames::canonicalize("App.Assets.Logo.png", "App"),
    ///     "Assets.Logo.png"
    /// );
    /// assert_eq!(
    ///     ResourceNames::canonicalize("Assets.Logo.png", "App"),
    ///     "Assets.Logo.png"
    /// );
    /// ```
    pub fn canonicalize(raw: &str, namespace_root: &str) -> String {
        let stripped = if namespace_root.is_empty() {
            raw
        } else {
            raw.strip_prefix(namespace_root).unwrap_or(raw)
        };
        stripped.trim_start_matches(NAMESPACE_DELIMITER).to_string()
    }

    /// Counts the delimiters in a canonical name
    pub fn delimiter_count(name: &str) -> usize {
        name.chars().filter(|c| *c == NAMESPACE_DELIMITER).count()
    }

    /// Returns true if a canonical name denotes a file of the current
    /// directory
    ///
    /// A name with at most one delimiter is a file (`"Logo.png"`, `"Assets"`);
    /// anything deeper belongs to a subdirectory.
    pub fn is_file_name(name: &str) -> bool {
        Self::delimiter_count(name) <= 1
    }

    /// Splits the canonical names of one directory level into file names and
    /// directory-member names, preserving input order
    pub fn partition<I>(names: I) -> (Vec<String>, Vec<String>)
    where
        I: IntoIterator<Item = String>,
    {
        names.into_iter().partition(|name| Self::is_file_name(name))
    }

    /// Splits a name at its first delimiter
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_view::ResourceNames;
    ///
    /// assert_eq!(
    ///     ResourceNames::split_first("Assets.Images.Logo.png"),
    ///     ("Assets", "Images.Logo.png")
    /// );
    /// assert_eq!(ResourceNames::split_first("Assets"), ("Assets", ""));
    /// ```
    pub fn split_first(name: &str) -> (&str, &str) {
        match name.split_once(NAMESPACE_DELIMITER) {
            Some((first, rest)) => (first, rest),
            None => (name, ""),
        }
    }

    /// Groups directory-member names by first token
    ///
    /// Each key is a child directory name; each value holds the remainders of
    /// that child's member names, in input order. Keys iterate in ascending
    /// name order.
    pub fn group_by_first_token<I>(members: I) -> BTreeMap<String, Vec<String>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for member in members {
            let (first, rest) = Self::split_first(&member);
            groups
                .entry(first.to_string())
                .or_default()
                .push(rest.to_string());
        }
        groups
    }
}
