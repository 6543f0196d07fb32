use crate::error::StartupError;
use crate::image_classifier::interface::Classification;
use std::cmp::Ordering;
use std::path::Path;

pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
    let exps: Vec<f32> = scores.iter().map(|&s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum > 0.0 {
        exps.iter().map(|e| e / sum).collect()
    } else {
        exps
    }
}

/// Turns raw class scores into classifications sorted by descending confidence.
pub fn rank_scores(
    scores: &[f32],
    labels: &[String],
    apply_softmax: bool,
    top_k: usize,
) -> Vec<Classification> {
    let probabilities = if apply_softmax {
        softmax(scores)
    } else {
        scores.to_vec()
    };

    let mut indexed: Vec<(usize, f32)> = probabilities
        .into_iter()
        .enumerate()
        .filter(|(_, p)| !p.is_nan())
        .collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    indexed.truncate(top_k);

    indexed
        .into_iter()
        .map(|(idx, confidence)| {
            let label = labels
                .get(idx)
                .cloned()
                .unwrap_or_else(|| format!("class_{}", idx));
            Classification::new(label, confidence.clamp(0.0, 1.0))
        })
        .collect()
}

/// One label per line, blank lines ignored.
pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_labels(path: &str) -> Result<Vec<String>, StartupError> {
    let text = std::fs::read_to_string(Path::new(path)).map_err(|source| StartupError::Labels {
        path: path.to_string(),
        source,
    })?;

    let labels = parse_labels(&text);
    if labels.is_empty() {
        return Err(StartupError::EmptyLabels(path.to_string()));
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["lager".to_string(), "stout".to_string(), "ipa".to_string()]
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probabilities = softmax(&[1.0, 2.0, 3.0]);
        let sum: f32 = probabilities.iter().sum();

        assert!((sum - 1.0).abs() < 1e-5);
        assert!(probabilities[2] > probabilities[1]);
        assert!(probabilities[1] > probabilities[0]);
    }

    #[test]
    fn test_rank_sorts_descending_and_truncates() {
        let ranked = rank_scores(&[0.1, 0.7, 0.2], &labels(), false, 2);

        assert_eq!(
            ranked,
            vec![
                Classification::new("stout", 0.7),
                Classification::new("ipa", 0.2)
            ]
        );
    }

    #[test]
    fn test_rank_applies_softmax() {
        let ranked = rank_scores(&[0.0, 0.0, 5.0], &labels(), true, 5);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].label, "ipa");
        assert!(ranked[0].confidence > 0.9);
        assert!(ranked.iter().all(|c| (0.0..=1.0).contains(&c.confidence)));
    }

    #[test]
    fn test_rank_falls_back_to_class_index() {
        let ranked = rank_scores(&[0.1, 0.2, 0.3, 0.9], &labels(), false, 1);

        assert_eq!(ranked, vec![Classification::new("class_3", 0.9)]);
    }

    #[test]
    fn test_rank_skips_nan_scores() {
        let ranked = rank_scores(&[f32::NAN, 0.4], &labels(), false, 5);

        assert_eq!(ranked, vec![Classification::new("stout", 0.4)]);
    }

    #[test]
    fn test_rank_empty_scores() {
        assert!(rank_scores(&[], &labels(), true, 5).is_empty());
    }

    #[test]
    fn test_parse_labels_skips_blank_lines() {
        assert_eq!(
            parse_labels("lager\n\n  stout  \r\nipa\n"),
            vec!["lager", "stout", "ipa"]
        );
    }

    #[test]
    fn test_load_labels_rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.txt");
        std::fs::write(&path, "\n\n").unwrap();

        let error = load_labels(path.to_str().unwrap()).unwrap_err();

        assert!(matches!(error, StartupError::EmptyLabels(_)));
    }

    #[test]
    fn test_load_labels_missing_file() {
        let error = load_labels("/definitely/not/here/labels.txt").unwrap_err();

        assert!(matches!(error, StartupError::Labels { .. }));
    }
}
