use crate::photo_library::interface::{LibraryEntry, PhotoLibrary};
use crate::selected_image::{ImageSourceKind, SelectedImage};
use image::metadata::Orientation;
use image::DynamicImage;
use std::path::PathBuf;

pub struct PhotoLibraryFake {
    photos: Vec<(LibraryEntry, DynamicImage)>,
    failure: Option<String>,
}

impl PhotoLibraryFake {
    pub fn new(photos: Vec<(&str, DynamicImage)>) -> Self {
        Self {
            photos: photos
                .into_iter()
                .map(|(name, image)| {
                    let entry = LibraryEntry {
                        name: name.to_string(),
                        path: PathBuf::from(name),
                    };
                    (entry, image)
                })
                .collect(),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            photos: vec![],
            failure: Some(message.to_string()),
        }
    }
}

impl PhotoLibrary for PhotoLibraryFake {
    fn list(&self) -> Result<Vec<LibraryEntry>, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(message) = &self.failure {
            return Err(message.clone().into());
        }
        Ok(self.photos.iter().map(|(entry, _)| entry.clone()).collect())
    }

    fn load(
        &self,
        entry: &LibraryEntry,
    ) -> Result<SelectedImage, Box<dyn std::error::Error + Send + Sync>> {
        let (_, image) = self
            .photos
            .iter()
            .find(|(candidate, _)| candidate == entry)
            .ok_or_else(|| format!("{} is not in the library", entry.name))?;

        Ok(SelectedImage::new(
            image.clone(),
            Orientation::NoTransforms,
            ImageSourceKind::PhotoLibrary,
            entry.name.clone(),
        ))
    }
}
