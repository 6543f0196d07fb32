use crate::error::ClassifierError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::selected_image::SelectedImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

const LABELS: [&str; 10] = [
    "lager",
    "pilsner",
    "pale ale",
    "ipa",
    "stout",
    "porter",
    "wheat beer",
    "sour",
    "cider",
    "not beer",
];

#[derive(Debug, Clone)]
pub enum FakeOutcome {
    #[cfg(test)]
    Fixed(Vec<Classification>),
    #[cfg(test)]
    Fail(String),
    #[cfg(test)]
    Unconvertible,
    Random { seed: u64 },
}

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    outcome: FakeOutcome,
    rng: Mutex<StdRng>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, outcome: FakeOutcome) -> Self {
        let seed = match outcome {
            FakeOutcome::Random { seed } => seed,
            #[cfg(test)]
            _ => 0,
        };

        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            outcome,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn random_classifications(&self) -> Result<Vec<Classification>, ClassifierError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| ClassifierError::Inference("random source poisoned".to_string()))?;

        let count = rng.random_range(0..=4usize);
        let mut classifications: Vec<Classification> = (0..count)
            .map(|_| Classification {
                label: LABELS[rng.random_range(0..LABELS.len())].to_string(),
                confidence: rng.random_range(0.0..1.0f32),
            })
            .collect();

        classifications.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(classifications)
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &SelectedImage) -> Result<Vec<Classification>, ClassifierError> {
        let _ = self
            .logger
            .info(&format!("Classifying {} with fake classifier...", image.name));

        match &self.outcome {
            #[cfg(test)]
            FakeOutcome::Fixed(classifications) => Ok(classifications.clone()),
            #[cfg(test)]
            FakeOutcome::Fail(message) => Err(ClassifierError::Inference(message.clone())),
            #[cfg(test)]
            FakeOutcome::Unconvertible => Err(ClassifierError::Conversion(format!(
                "{} cannot be converted",
                image.name
            ))),
            FakeOutcome::Random { .. } => self.random_classifications(),
        }
    }
}
