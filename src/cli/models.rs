use std::fmt::Display;

/// Model Variants
/// --------------

/// The base model type
pub static MODEL_TYPE: &str = "phobert";

/// PhoBERT fine-tuned on the VNTC news topics
pub static PHOBERT_NEWS: &str = "tnlanh99/phobert-news-classification";

/// All known PhoBERT models
pub static ALL_MODELS: &[&str; 1] = &[PHOBERT_NEWS];

/// The default model to use for news classification
pub static DEFAULT_MODEL: &str = PHOBERT_NEWS;

/// Available Models
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Model {
    /// The PhoBERT family of models, with the specific model name contained within
    PhoBert(String),

    /// Any other Hugging Face Hub model, referenced as "owner/name"
    Hub(String),
}

impl Model {
    /// Get the model type
    pub fn model_type(&self) -> &str {
        match self {
            Model::PhoBert(_) => MODEL_TYPE,
            Model::Hub(_) => "hub",
        }
    }

    /// The Hugging Face Hub name of the model
    pub fn name(&self) -> &str {
        match self {
            Model::PhoBert(name) | Model::Hub(name) => name,
        }
    }

}

impl Default for Model {
    fn default() -> Self {
        Model::PhoBert(DEFAULT_MODEL.to_string())
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Model {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if ALL_MODELS.contains(&value) {
            Ok(Model::PhoBert(value.to_string()))
        } else if is_hub_name(value) {
            Ok(Model::Hub(value.to_string()))
        } else {
            Err(ModelError::Unknown(value.to_string()))
        }
    }
}

fn is_hub_name(value: &str) -> bool {
    match value.split_once('/') {
        Some((owner, name)) => !owner.is_empty() && !name.is_empty() && !name.contains('/'),
        None => false,
    }
}

/// Model Error
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    /// No model found for the given string
    #[error("no model found for {0}")]
    Unknown(String),
}
