//! Generator configuration

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ManifestError;
use crate::paths;

/// Shape of the generated manifest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// One array of every icon directly inside the source directory
    #[default]
    Flat,
    /// One array per immediate subfolder, keyed by folder name
    Grouped,
}

impl FromStr for Layout {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "grouped" => Ok(Self::Grouped),
            _ => Err(ManifestError::UnknownLayout(s.to_string())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => f.write_str("flat"),
            Self::Grouped => f.write_str("grouped"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub project_root: PathBuf,
    pub layout: Layout,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            layout: Layout::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            ..Self::default()
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn source_dir(&self) -> PathBuf {
        paths::custom_icon_dir(&self.project_root)
    }

    pub fn output_path(&self) -> PathBuf {
        paths::manifest_path(&self.source_dir())
    }
}
