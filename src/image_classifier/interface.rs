use crate::error::ClassifierError;
use crate::selected_image::SelectedImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Results are ordered by descending confidence.
pub trait ImageClassifier: Send + Sync {
    fn classify(&self, image: &SelectedImage) -> Result<Vec<Classification>, ClassifierError>;
}
