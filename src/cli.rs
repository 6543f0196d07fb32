use crate::config::{CameraKind, ClassifierKind, Config, DisplayKind};
use crate::image_classifier::models::model_config::Normalization;
use clap::Parser;
use std::path::PathBuf;

/// Pick or capture a photo and show what the classifier sees in it
#[derive(Parser, Debug)]
#[command(name = "photo-classifier")]
#[command(version)]
#[command(about = "Classify a photo from a camera or photo library")]
pub struct Args {
    /// Where the screen is drawn
    #[arg(long, value_enum, default_value_t = DisplayKind::Gui)]
    pub display: DisplayKind,

    /// Classifier backend
    #[arg(long, value_enum, default_value_t = ClassifierKind::Onnx)]
    pub classifier: ClassifierKind,

    /// ONNX model file
    #[arg(long, env = "PHOTO_CLASSIFIER_MODEL")]
    pub model: Option<String>,

    /// Labels file, one label per line in model output order
    #[arg(long, env = "PHOTO_CLASSIFIER_LABELS")]
    pub labels: Option<String>,

    /// Square model input size in pixels
    #[arg(long)]
    pub input_size: Option<u32>,

    #[arg(long, value_enum)]
    pub normalization: Option<Normalization>,

    /// Model already outputs probabilities
    #[arg(long)]
    pub no_softmax: bool,

    /// Seed for the fake classifier
    #[arg(long)]
    pub seed: Option<u64>,

    /// Photo library directory
    #[arg(long)]
    pub library: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = CameraKind::Fake)]
    pub camera: CameraKind,

    /// Folder watched by the folder camera
    #[arg(long)]
    pub camera_dir: Option<PathBuf>,

    /// Number of predictions shown
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Log timestamp offset from UTC, defaults to the local offset
    #[arg(
        long,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(-23..=23)
    )]
    pub utc_offset_hours: Option<i32>,
}

impl Args {
    pub fn into_config(self) -> Config {
        let mut config = Config {
            display: self.display,
            classifier: self.classifier,
            camera: self.camera,
            ..Config::default()
        };

        if let Some(model) = self.model {
            config.model.onnx_model_path = model;
        }
        if let Some(labels) = self.labels {
            config.model.labels_path = labels;
        }
        if let Some(size) = self.input_size {
            config.model.input_shape = (size, size);
        }
        if let Some(normalization) = self.normalization {
            config.model.normalization = normalization;
        }
        if self.no_softmax {
            config.model.softmax = false;
        }
        if let Some(seed) = self.seed {
            config.fake_seed = seed;
        }
        if let Some(library) = self.library {
            config.library_dir = library;
        }
        if let Some(camera_dir) = self.camera_dir {
            config.camera_dir = camera_dir;
        }
        if let Some(max_results) = self.max_results {
            config.max_results = max_results.max(1);
        }
        if let Some(offset) = self
            .utc_offset_hours
            .and_then(|hours| chrono::FixedOffset::east_opt(hours * 3600))
        {
            config.logger_timezone = offset;
        }

        config
    }
}
