use crate::image_classifier::models::model_config::ModelConfig;
use chrono::Offset;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DisplayKind {
    Console,
    Gui,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ClassifierKind {
    Onnx,
    Fake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CameraKind {
    Fake,
    Folder,
    None,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub window_title: String,
    pub initial_label: String,
    pub max_results: usize,
    pub result_separator: String,
    pub logger_timezone: chrono::FixedOffset,
    pub display: DisplayKind,
    pub classifier: ClassifierKind,
    pub model: ModelConfig,
    pub fake_seed: u64,
    pub camera: CameraKind,
    pub camera_dir: PathBuf,
    pub library_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Photo Classifier".to_string(),
            initial_label: "Pick a photo to classify.".to_string(),
            max_results: 2,
            result_separator: " | ".to_string(),
            logger_timezone: local_offset(),
            display: DisplayKind::Gui,
            classifier: ClassifierKind::Onnx,
            model: ModelConfig::default(),
            fake_seed: 0,
            camera: CameraKind::Fake,
            camera_dir: PathBuf::from("./captures"),
            library_dir: PathBuf::from("."),
        }
    }
}

fn local_offset() -> chrono::FixedOffset {
    chrono::Local::now().offset().fix()
}
