/// The model configuration needed by the pipeline
pub mod model;

/// Inference
pub mod inference;

/// Classifier backed by the hosted inference API
pub mod hosted;

/// Scored output
pub mod output;

pub use hosted::Hosted;
pub use inference::{classify, Classifier, ClassifyError, Prediction};
pub use model::Config;
pub use output::Scores;
