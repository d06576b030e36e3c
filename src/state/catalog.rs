use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Image extensions shown in a zone folder (compared case-insensitively)
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Suffix of the canonical "after" image used as a zone's cover
const COVER_SUFFIX: &str = "_Satellite_2024_After.png";

/// The on-disk satellite image store
///
/// Layout: one subdirectory per zone under `root`, named `<prefix><zone>`.
/// Nothing is cached; every call walks the directory again.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    root: PathBuf,
    prefix: String,
}

impl ImageCatalog {
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of all zone folders under the root, sorted
    pub fn list_zone_folders(&self) -> Vec<String> {
        if !self.root.is_dir() {
            warn!("⚠️  Image root {} does not exist", self.root.display());
            return Vec::new();
        }

        let mut folders: Vec<String> = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        folders.sort();
        folders.dedup();
        folders
    }

    /// Cover image of a folder, or None when the convention isn't met
    pub fn cover_image(&self, folder: &str) -> Option<PathBuf> {
        let base = folder.strip_prefix(self.prefix.as_str()).unwrap_or(folder);
        let path = self.root.join(folder).join(format!("{}{}", base, COVER_SUFFIX));
        path.is_file().then_some(path)
    }

    /// All recognised images in a folder, sorted by file name
    pub fn list_images(&self, folder: &str) -> Vec<PathBuf> {
        let dir = self.root.join(folder);
        if !dir.is_dir() {
            warn!("⚠️  Zone folder {} does not exist", dir.display());
            return Vec::new();
        }

        let mut images: Vec<PathBuf> = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| is_image(p))
            .collect();
        images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        images
    }

    /// Folder holding a zone's imagery, if one exists on disk
    pub fn folder_for_zone(&self, zone_id: &str) -> Option<String> {
        let folder = format!("{}{}", self.prefix, zone_id);
        self.root.join(&folder).is_dir().then_some(folder)
    }

    /// Human-readable folder caption: prefix stripped, underscores as spaces
    pub fn display_name(&self, folder: &str) -> String {
        folder
            .strip_prefix(self.prefix.as_str())
            .unwrap_or(folder)
            .replace('_', " ")
            .trim()
            .to_string()
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store() -> (tempfile::TempDir, ImageCatalog) {
        let dir = tempfile::tempdir().unwrap();
        let alpha = dir.path().join("data_Alpha");
        fs::create_dir_all(&alpha).unwrap();
        fs::write(alpha.join("Alpha_Satellite_2024_After.png"), b"png").unwrap();
        fs::write(alpha.join("Alpha_Satellite_2019_Before.JPG"), b"jpg").unwrap();
        fs::write(alpha.join("notes.txt"), b"txt").unwrap();
        fs::create_dir_all(dir.path().join("data_Bravo_Block")).unwrap();
        fs::write(dir.path().join("stray.png"), b"png").unwrap();

        let catalog = ImageCatalog::new(dir.path(), "data_");
        (dir, catalog)
    }

    #[test]
    fn test_list_zone_folders_sorted() {
        let (_dir, catalog) = store();
        assert_eq!(catalog.list_zone_folders(), vec!["data_Alpha", "data_Bravo_Block"]);
    }

    #[test]
    fn test_missing_root_is_empty() {
        let catalog = ImageCatalog::new("/nonexistent/imagery", "data_");
        assert!(catalog.list_zone_folders().is_empty());
        assert!(catalog.list_images("data_Alpha").is_empty());
    }

    #[test]
    fn test_cover_image() {
        let (dir, catalog) = store();
        assert_eq!(
            catalog.cover_image("data_Alpha"),
            Some(dir.path().join("data_Alpha/Alpha_Satellite_2024_After.png"))
        );
        assert_eq!(catalog.cover_image("data_Bravo_Block"), None);
        assert_eq!(catalog.cover_image("data_Missing"), None);
    }

    #[test]
    fn test_list_images_filters_extensions() {
        let (_dir, catalog) = store();
        let names: Vec<String> = catalog
            .list_images("data_Alpha")
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["Alpha_Satellite_2019_Before.JPG", "Alpha_Satellite_2024_After.png"]
        );
    }

    #[test]
    fn test_folder_for_zone() {
        let (_dir, catalog) = store();
        assert_eq!(catalog.folder_for_zone("Alpha"), Some("data_Alpha".to_string()));
        assert_eq!(catalog.folder_for_zone("Charlie"), None);
    }

    #[test]
    fn test_display_name() {
        let (_dir, catalog) = store();
        assert_eq!(catalog.display_name("data_Bravo_Block"), "Bravo Block");
        assert_eq!(catalog.display_name("Loose_Folder"), "Loose Folder");
    }
}
