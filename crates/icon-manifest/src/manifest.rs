//! Manifest Types
//!
//! In-memory forms of `icons.json` and their exact on-disk rendering.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cmp::Ordering;
use std::path::Path;
use tracing::debug;

use crate::collate::IconCollator;
use crate::error::ManifestResult;
use crate::scan;

/// Collated list of the icons directly inside the source directory.
///
/// Renders as a compact JSON array plus a trailing newline, e.g.
/// `["a.svg","b.svg"]\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatManifest {
    icons: Vec<String>,
}

impl FlatManifest {
    pub fn collect(dir: &Path, collator: &IconCollator) -> ManifestResult<Self> {
        let mut icons = scan::icon_filenames(dir)?;
        collator.sort(&mut icons);
        Ok(Self { icons })
    }

    pub fn icons(&self) -> &[String] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn render(&self) -> ManifestResult<String> {
        let mut out = serde_json::to_string(&self.icons)?;
        out.push('\n');
        Ok(out)
    }
}

/// Icons grouped by the subfolder they live in.
///
/// Folders without icons are dropped. Files sitting directly in the source
/// directory are not part of any group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedManifest {
    groups: Vec<(String, Vec<String>)>,
}

impl GroupedManifest {
    pub fn collect(dir: &Path, collator: &IconCollator) -> ManifestResult<Self> {
        let mut groups = Vec::new();

        for entry in scan::list_entries(dir)? {
            if !entry.is_dir() {
                continue;
            }

            let mut icons = scan::icon_filenames(&dir.join(&entry.name))?;
            if icons.is_empty() {
                debug!("Skipping folder without icons: {:?}", entry.name);
                continue;
            }
            collator.sort(&mut icons);
            groups.push((entry.name, icons));
        }

        groups.sort_by(|(a, _), (b, _)| folder_order(collator, a, b));
        Ok(Self { groups })
    }

    pub fn folder_count(&self) -> usize {
        self.groups.len()
    }

    pub fn icon_count(&self) -> usize {
        self.groups.iter().map(|(_, icons)| icons.len()).sum()
    }

    /// Two-space indented JSON object plus a trailing newline.
    pub fn render(&self) -> ManifestResult<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

/// Folder names a JSON object consumer treats as array indices: canonical
/// decimal, below `u32::MAX`. Such keys are enumerated first, numerically.
fn array_index(name: &str) -> Option<u32> {
    let index: u32 = name.parse().ok()?;
    (index != u32::MAX && index.to_string() == name).then_some(index)
}

fn folder_order(collator: &IconCollator, a: &str, b: &str) -> Ordering {
    match (array_index(a), array_index(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collator.compare(a, b),
    }
}

impl Serialize for GroupedManifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (folder, icons) in &self.groups {
            map.serialize_entry(folder, icons)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn collator() -> IconCollator {
        IconCollator::japanese().unwrap()
    }

    #[test]
    fn test_flat_render_compact() {
        let manifest = FlatManifest {
            icons: vec!["a.svg".to_string(), "b.svg".to_string()],
        };
        assert_eq!(manifest.render().unwrap(), "[\"a.svg\",\"b.svg\"]\n");
    }

    #[test]
    fn test_flat_render_empty() {
        assert_eq!(FlatManifest::default().render().unwrap(), "[]\n");
    }

    #[test]
    fn test_flat_collect_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.svg", "a.svg", "note.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("sub")).unwrap();

        let manifest = FlatManifest::collect(dir.path(), &collator()).unwrap();
        assert_eq!(manifest.icons(), ["a.svg", "b.svg"]);
        assert_eq!(manifest.len(), 2);
    }

    #[test]
    fn test_grouped_collect() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("02-person")).unwrap();
        fs::create_dir(root.join("01-money")).unwrap();
        fs::create_dir(root.join("03-empty")).unwrap();
        fs::write(root.join("02-person/user.svg"), "").unwrap();
        fs::write(root.join("01-money/yen.svg"), "").unwrap();
        fs::write(root.join("01-money/coin.SVG"), "").unwrap();
        fs::write(root.join("01-money/readme.md"), "").unwrap();
        fs::write(root.join("03-empty/readme.md"), "").unwrap();
        fs::write(root.join("loose.svg"), "").unwrap();

        let manifest = GroupedManifest::collect(root, &collator()).unwrap();
        assert_eq!(manifest.folder_count(), 2);
        assert_eq!(manifest.icon_count(), 3);
        assert_eq!(
            manifest.render().unwrap(),
            concat!(
                "{\n  \"01-money\": [\n    \"coin.SVG\",\n    \"yen.svg\"\n  ],\n",
                "  \"02-person\": [\n    \"user.svg\"\n  ]\n}\n",
            )
        );
    }

    #[test]
    fn test_integer_folders_first_in_numeric_order() {
        let dir = tempfile::tempdir().unwrap();
        for folder in ["a", "10", "2", "01", "-1"] {
            fs::create_dir(dir.path().join(folder)).unwrap();
            fs::write(dir.path().join(folder).join("icon.svg"), "").unwrap();
        }

        let manifest = GroupedManifest::collect(dir.path(), &collator()).unwrap();
        let folders: Vec<&str> = manifest.groups.iter().map(|(name, _)| name.as_str()).collect();
        // "01" and "-1" are not canonical indices, so they collate with the rest.
        assert_eq!(folders[..2], ["2", "10"]);
        assert_eq!(folders.len(), 5);
        assert_eq!(folders[4], "a");
    }

    #[test]
    fn test_array_index() {
        assert_eq!(array_index("0"), Some(0));
        assert_eq!(array_index("42"), Some(42));
        assert_eq!(array_index("042"), None);
        assert_eq!(array_index("+4"), None);
        assert_eq!(array_index("4294967295"), None);
        assert_eq!(array_index("money"), None);
    }

    #[test]
    fn test_grouped_render_empty() {
        assert_eq!(GroupedManifest::default().render().unwrap(), "{}\n");
    }
}
