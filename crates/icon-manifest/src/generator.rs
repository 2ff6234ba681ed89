//! Manifest Generator
//!
//! Rescans the custom icon directory and rewrites `icons.json` from scratch.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::collate::IconCollator;
use crate::config::{GeneratorConfig, Layout};
use crate::error::{ManifestError, ManifestResult};
use crate::manifest::{FlatManifest, GroupedManifest};

/// What a generator run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The source directory does not exist; nothing was written.
    SourceMissing { source_dir: PathBuf },
    /// The manifest was written. `folders` is set for the grouped layout.
    Written {
        path: PathBuf,
        icons: usize,
        folders: Option<usize>,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceMissing { source_dir } => {
                write!(f, "icon directory {} does not exist", source_dir.display())
            }
            Self::Written {
                path,
                icons,
                folders: None,
            } => write!(f, "wrote {} icons to {}", icons, path.display()),
            Self::Written {
                path,
                icons,
                folders: Some(folders),
            } => write!(
                f,
                "wrote {} folders, {} icons to {}",
                folders,
                icons,
                path.display()
            ),
        }
    }
}

/// Run one full regeneration for `config`.
///
/// A missing source directory is returned as [`Outcome::SourceMissing`];
/// reporting it is up to the caller.
pub fn generate(config: &GeneratorConfig) -> ManifestResult<Outcome> {
    let source_dir = config.source_dir();
    if !source_dir.exists() {
        debug!("Icon directory does not exist: {:?}", source_dir);
        return Ok(Outcome::SourceMissing { source_dir });
    }

    let collator = IconCollator::japanese()?;
    let path = config.output_path();

    let (content, icons, folders) = match config.layout {
        Layout::Flat => {
            let manifest = FlatManifest::collect(&source_dir, &collator)?;
            if manifest.is_empty() {
                debug!("No icons in {:?}, writing an empty list", source_dir);
            }
            (manifest.render()?, manifest.len(), None)
        }
        Layout::Grouped => {
            let manifest = GroupedManifest::collect(&source_dir, &collator)?;
            (
                manifest.render()?,
                manifest.icon_count(),
                Some(manifest.folder_count()),
            )
        }
    };

    fs::write(&path, content).map_err(|source| ManifestError::Write {
        path: path.clone(),
        source,
    })?;

    info!("Wrote {} manifest ({} icons) to {:?}", config.layout, icons, path);
    Ok(Outcome::Written {
        path,
        icons,
        folders,
    })
}
