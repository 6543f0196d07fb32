/// Failures of a single classification request.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The image could not be turned into the classifier's input tensor.
    #[error("unable to convert image to classifier input: {0}")]
    Conversion(String),

    #[error("classification failed: {0}")]
    Inference(String),
}

impl ClassifierError {
    /// Conversion failures stop the screen, everything else is shown to the user.
    pub fn is_unrecoverable(&self) -> bool {
        matches!(self, ClassifierError::Conversion(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to load model {path}: {message}")]
    ModelLoad { path: String, message: String },

    #[error("failed to read labels {path}: {source}")]
    Labels {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("labels file {0} contains no labels")]
    EmptyLabels(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("unrecoverable error: {0}")]
    Unrecoverable(String),

    #[error("{0} lock poisoned")]
    LockPoisoned(&'static str),
}
