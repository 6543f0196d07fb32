use crate::library::logger::interface::Logger;
use crate::photo_library::interface::{LibraryEntry, PhotoLibrary};
use crate::selected_image::{is_image_file, load_image_file, ImageSourceKind, SelectedImage};
use std::path::PathBuf;
use std::sync::Arc;

pub struct PhotoLibraryFileSystem {
    directory: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PhotoLibraryFileSystem {
    pub fn new(directory: PathBuf, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            directory,
            logger: logger.with_namespace("photo_library"),
        }
    }
}

impl PhotoLibrary for PhotoLibraryFileSystem {
    fn list(&self) -> Result<Vec<LibraryEntry>, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = Vec::new();

        for entry in std::fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.is_file() && is_image_file(&path) {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                entries.push(LibraryEntry { name, path });
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        self.logger.info(&format!(
            "Found {} images in {}",
            entries.len(),
            self.directory.display()
        ))?;

        Ok(entries)
    }

    fn load(
        &self,
        entry: &LibraryEntry,
    ) -> Result<SelectedImage, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Loading {}", entry.path.display()))?;
        let image = load_image_file(&entry.path, ImageSourceKind::PhotoLibrary)?;
        Ok(image)
    }
}
