use derive_new::new;
use serde::{Deserialize, Serialize};

use super::{Config, Scores};

/// A single scored class label
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct Prediction {
    /// The class name label
    pub label: String,

    /// The confidence score for the label
    pub score: f32,
}

/// A service that scores text against a model's class labels
pub trait Classifier {
    /// Return up to `top_k` predictions for the text, highest score first
    fn classify(&self, text: &str, top_k: usize) -> Result<Vec<Prediction>, ClassifyError>;
}

/// Classify a news text, requesting a score for every label the model knows about
pub fn classify<C: Classifier + ?Sized>(
    classifier: &C,
    config: &Config,
    text: &str,
) -> Result<Scores, ClassifyError> {
    let top_k = config.num_labels();

    log::debug!(
        "Classifying {} characters with {} (top_k = {})",
        text.chars().count(),
        config.model_name,
        top_k
    );

    let predictions = classifier.classify(text, top_k)?;

    Ok(Scores::new(predictions))
}

/// Classify Error
#[derive(thiserror::Error, Debug)]
pub enum ClassifyError {
    /// The service answered with an error status
    #[error("inference service returned HTTP {status}: {body}")]
    Status {
        /// The HTTP status code
        status: u16,

        /// The response body, for diagnostics
        body: String,
    },

    /// The service could not be reached
    #[error("unable to reach the inference service: {0}")]
    Transport(String),

    /// The response body exceeded the size limit
    #[error("inference response exceeded {limit} bytes")]
    TooLarge {
        /// The maximum accepted body size in bytes
        limit: usize,
    },

    /// The response body could not be parsed
    #[error("unable to parse the inference response: {0}")]
    Json(String),
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::HashMap};

    use pretty_assertions::assert_eq;

    use super::*;

    struct Fixed {
        requested: Cell<usize>,
    }

    impl Classifier for Fixed {
        fn classify(&self, _text: &str, top_k: usize) -> Result<Vec<Prediction>, ClassifyError> {
            self.requested.set(top_k);

            Ok(vec![
                Prediction::new("Kinh doanh".to_string(), 0.1),
                Prediction::new("The thao".to_string(), 0.7),
                Prediction::new("Vi tinh".to_string(), 0.2),
            ])
        }
    }

    #[test]
    fn test_classify_requests_every_label() {
        let config = Config::new(HashMap::from([
            (0, "Kinh doanh".to_string()),
            (1, "The thao".to_string()),
            (2, "Vi tinh".to_string()),
        ]));
        let classifier = Fixed {
            requested: Cell::new(0),
        };

        let scores = classify(&classifier, &config, "Đội tuyển thắng 2-0").unwrap();

        assert_eq!(classifier.requested.get(), 3);
        assert_eq!(scores.top().map(|p| p.label.as_str()), Some("The thao"));
        assert_eq!(scores.len(), 3);
    }
}
