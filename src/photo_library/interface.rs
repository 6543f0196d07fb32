use crate::selected_image::SelectedImage;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    pub name: String,
    pub path: PathBuf,
}

pub trait PhotoLibrary: Send + Sync {
    fn list(&self) -> Result<Vec<LibraryEntry>, Box<dyn std::error::Error + Send + Sync>>;
    fn load(
        &self,
        entry: &LibraryEntry,
    ) -> Result<SelectedImage, Box<dyn std::error::Error + Send + Sync>>;
}
