use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSourceKind {
    Camera,
    PhotoLibrary,
}

impl fmt::Display for ImageSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSourceKind::Camera => write!(f, "camera"),
            ImageSourceKind::PhotoLibrary => write!(f, "photo library"),
        }
    }
}

/// An image picked by the user, kept as decoded pixels plus the orientation
/// it should be viewed in.
#[derive(Clone, PartialEq)]
pub struct SelectedImage {
    pub image: Arc<DynamicImage>,
    pub orientation: Orientation,
    pub source: ImageSourceKind,
    pub name: String,
}

impl SelectedImage {
    pub fn new(
        image: DynamicImage,
        orientation: Orientation,
        source: ImageSourceKind,
        name: impl Into<String>,
    ) -> Self {
        Self {
            image: Arc::new(image),
            orientation,
            source,
            name: name.into(),
        }
    }

    /// Pixels rotated/flipped so that up is up.
    pub fn oriented(&self) -> DynamicImage {
        let mut image = (*self.image).clone();
        image.apply_orientation(self.orientation);
        image
    }

    /// Dimensions after orientation is applied.
    pub fn oriented_dimensions(&self) -> (u32, u32) {
        let (w, h) = (self.image.width(), self.image.height());
        match self.orientation {
            Orientation::Rotate90
            | Orientation::Rotate270
            | Orientation::Rotate90FlipH
            | Orientation::Rotate270FlipH => (h, w),
            _ => (w, h),
        }
    }
}

// Pixel buffers are too noisy for logs.
impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("orientation", &self.orientation)
            .finish()
    }
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Decodes an image file and reads its orientation from the file metadata.
pub fn load_image_file(
    path: &Path,
    source: ImageSourceKind,
) -> Result<SelectedImage, image::ImageError> {
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;
    let image = DynamicImage::from_decoder(decoder)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(SelectedImage::new(image, orientation, source, name))
}
