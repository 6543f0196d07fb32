use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use crate::selected_image::{ImageSourceKind, SelectedImage};
use chrono::Utc;
use image::metadata::Orientation;
use image::{DynamicImage, ImageBuffer, Rgb};
use rand::Rng;
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    available: bool,
    frame_size: (u32, u32),
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, available: bool) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            available,
            frame_size: (320, 240),
        }
    }

    fn synthesize_frame(&self) -> DynamicImage {
        let (width, height) = self.frame_size;
        let mut rng = rand::rng();

        let frame = ImageBuffer::from_fn(width, height, |x, y| {
            let noise: u8 = rng.random_range(0..24);
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            Rgb([r.saturating_add(noise), g.saturating_add(noise), 96])
        });

        DynamicImage::ImageRgb8(frame)
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn is_available(&self) -> bool {
        self.available
    }

    fn capture_image(&self) -> Result<SelectedImage, Box<dyn std::error::Error + Send + Sync>> {
        if !self.available {
            return Err("Camera is not available".into());
        }

        self.logger.info("Capturing image...")?;
        let frame = self.synthesize_frame();
        let name = format!("capture-{}.png", Utc::now().format("%Y%m%d-%H%M%S"));
        self.logger.info(&format!("Image captured: {}", name))?;

        Ok(SelectedImage::new(
            frame,
            Orientation::NoTransforms,
            ImageSourceKind::Camera,
            name,
        ))
    }
}
