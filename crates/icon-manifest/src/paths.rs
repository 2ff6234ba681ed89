//! Path Utilities
//!
//! Where custom icons live relative to the project root, and where the
//! manifest goes.

use std::path::{Path, PathBuf};

/// File name of the generated manifest
pub const MANIFEST_FILE_NAME: &str = "icons.json";

/// Get the custom icon directory (`<root>/public/icon/custom/`)
pub fn custom_icon_dir(project_root: &Path) -> PathBuf {
    project_root.join("public").join("icon").join("custom")
}

/// Get the manifest path, which sits inside the icon directory it describes
pub fn manifest_path(icon_dir: &Path) -> PathBuf {
    icon_dir.join(MANIFEST_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_under_root() {
        let dir = custom_icon_dir(Path::new("/work/app"));
        assert_eq!(dir, PathBuf::from("/work/app/public/icon/custom"));
        assert_eq!(
            manifest_path(&dir),
            PathBuf::from("/work/app/public/icon/custom/icons.json")
        );
    }
}
