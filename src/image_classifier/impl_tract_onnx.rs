use crate::error::{ClassifierError, StartupError};
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::ranking::{load_labels, rank_scores};
use crate::image_classifier::tract::image::selected_image_to_tensor;
use crate::library::logger::interface::Logger;
use crate::selected_image::SelectedImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, StartupError> {
        let logger = logger
            .with_namespace("image_classifier")
            .with_namespace("tract_onnx");

        let (height, width) = config.input_shape;
        let _ = logger.info(&format!(
            "Loading model {} ({}x{})",
            config.onnx_model_path, width, height
        ));

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    f32::fact([1, 3, height as usize, width as usize]).into(),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| StartupError::ModelLoad {
                path: config.onnx_model_path.clone(),
                message: e.to_string(),
            })?;

        let labels = load_labels(&config.labels_path)?;

        let _ = logger.info(&format!("Model ready with {} labels", labels.len()));

        Ok(Self {
            model,
            labels,
            config,
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(&self, image: &SelectedImage) -> Result<Vec<Classification>, ClassifierError> {
        let (height, width) = self.config.input_shape;
        let input =
            selected_image_to_tensor(image, width, height, self.config.normalization)?;

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifierError::Inference("model produced no outputs".to_string()))?;

        let scores: Vec<f32> = output
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?
            .iter()
            .copied()
            .collect();

        let classifications = rank_scores(
            &scores,
            &self.labels,
            self.config.softmax,
            self.config.top_k,
        );

        let _ = self.logger.info(&format!(
            "Classified {}: {:?}",
            image.name, classifications
        ));

        Ok(classifications)
    }
}
