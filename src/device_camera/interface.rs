use crate::selected_image::SelectedImage;

pub trait DeviceCamera: Send + Sync {
    fn is_available(&self) -> bool;
    fn capture_image(&self) -> Result<SelectedImage, Box<dyn std::error::Error + Send + Sync>>;
}
