#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Normalization {
    /// Pixels scaled to [0, 1].
    #[value(name = "unit")]
    UnitRange,
    /// [0, 1] followed by the ImageNet per-channel mean/std.
    #[value(name = "imagenet")]
    ImageNet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: String,
    pub labels_path: String,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub normalization: Normalization,
    pub softmax: bool,
    pub top_k: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: "./models/classifier.onnx".to_string(),
            labels_path: "./models/labels.txt".to_string(),
            input_shape: (224, 224),
            normalization: Normalization::ImageNet,
            softmax: true,
            top_k: 5,
        }
    }
}
