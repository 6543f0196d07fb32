use crate::config::Config;
use crate::error::ClassifierError;
use crate::image_classifier::interface::Classification;

pub const ANALYZING: &str = "Analyzing...";
pub const NOTHING_RECOGNIZED: &str = "Nothing recognized.";
pub const UNABLE_TO_ANALYZE: &str = "Unable to analyze image.";
pub const CAMERA_UNAVAILABLE: &str = "Camera is not available";

/// `(0.93) lager | (0.05) stout`. Input is assumed to be ranked already.
pub fn format_classifications(
    classifications: &[Classification],
    max_results: usize,
    separator: &str,
) -> String {
    classifications
        .iter()
        .take(max_results)
        .map(|c| format!("({:.2}) {}", c.confidence, c.label))
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn describe_outcome(
    config: &Config,
    outcome: &Result<Vec<Classification>, ClassifierError>,
) -> String {
    match outcome {
        Ok(classifications) if classifications.is_empty() => NOTHING_RECOGNIZED.to_string(),
        Ok(classifications) => format_classifications(
            classifications,
            config.max_results,
            &config.result_separator,
        ),
        Err(error) => format!("{}\n{}", UNABLE_TO_ANALYZE, error),
    }
}
