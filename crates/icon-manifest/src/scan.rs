//! Directory Scanner
//!
//! Lists the immediate entries of an icon directory and picks out SVG files.
//! Nothing here recurses; the grouped layout walks exactly one level of
//! subfolders by calling [`list_entries`] on each.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{ManifestError, ManifestResult};

/// Icon file extension, compared against the lower-cased name
pub const ICON_SUFFIX: &str = ".svg";

/// Kind of a directory entry, as reported by the entry itself.
/// Symlinks are not followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(ft: fs::FileType) -> Self {
        if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_file() {
            Self::File
        } else if ft.is_dir() {
            Self::Directory
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntryInfo {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// A regular file whose name ends in `.svg`, ignoring case
    pub fn is_icon(&self) -> bool {
        self.kind == EntryKind::File && self.name.to_lowercase().ends_with(ICON_SUFFIX)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// List the immediate entries of `dir`, in whatever order the OS returns them.
pub fn list_entries(dir: &Path) -> ManifestResult<Vec<DirEntryInfo>> {
    let entries = fs::read_dir(dir).map_err(|source| ManifestError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ManifestError::ReadEntry {
            path: dir.to_path_buf(),
            source,
        })?;

        let file_type = entry.file_type().map_err(|source| ManifestError::ReadEntry {
            path: dir.to_path_buf(),
            source,
        })?;

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!("Skipping entry with non UTF-8 name in {:?}: {:?}", dir, raw);
                continue;
            }
        };

        out.push(DirEntryInfo::new(name, EntryKind::from(file_type)));
    }

    Ok(out)
}

/// Names of the icon files directly inside `dir`, unsorted.
pub fn icon_filenames(dir: &Path) -> ManifestResult<Vec<String>> {
    let names = list_entries(dir)?
        .into_iter()
        .filter_map(|entry| {
            if entry.is_icon() {
                Some(entry.name)
            } else {
                debug!("Ignoring {:?} ({:?})", entry.name, entry.kind);
                None
            }
        })
        .collect();
    Ok(names)
}
