use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use crate::selected_image::{is_image_file, load_image_file, ImageSourceKind, SelectedImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// Camera backed by a folder an external capture tool writes frames into.
/// Capturing picks up the newest image in the folder.
pub struct DeviceCameraCaptureFolder {
    directory: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraCaptureFolder {
    pub fn new(directory: PathBuf, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            directory,
            logger: logger.with_namespace("camera").with_namespace("capture_folder"),
        }
    }

    fn newest_image(
        directory: &Path,
    ) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        let mut newest: Option<(SystemTime, PathBuf)> = None;

        for entry in std::fs::read_dir(directory)? {
            let path = entry?.path();
            if !path.is_file() || !is_image_file(&path) {
                continue;
            }
            let modified = std::fs::metadata(&path)?.modified()?;
            let is_newer = newest
                .as_ref()
                .map(|(time, _)| modified > *time)
                .unwrap_or(true);
            if is_newer {
                newest = Some((modified, path));
            }
        }

        Ok(newest.map(|(_, path)| path))
    }
}

impl DeviceCamera for DeviceCameraCaptureFolder {
    fn is_available(&self) -> bool {
        self.directory.is_dir()
    }

    fn capture_image(&self) -> Result<SelectedImage, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Looking for newest capture in {}",
            self.directory.display()
        ))?;

        let path = Self::newest_image(&self.directory)?
            .ok_or_else(|| format!("no captures in {}", self.directory.display()))?;

        let image = load_image_file(&path, ImageSourceKind::Camera)?;
        self.logger.info(&format!("Image captured: {}", image.name))?;

        Ok(image)
    }
}
