use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;

use crate::utils::{
    classes::{invert_map, labels_by_id},
    hugging_face::download_hf_config,
};

/// The model configuration properties needed for the pipeline
#[derive(burn::config::Config)]
pub struct Config {
    /// A mapping from class ids to class name labels
    pub id2label: HashMap<usize, String>,

    /// Model name (e.g., "tnlanh99/phobert-news-classification")
    #[config(default = "\"tnlanh99/phobert-news-classification\".to_string()")]
    pub model_name: String,
}

/// The subset of a Hugging Face `config.json` that the pipeline reads
#[derive(Deserialize)]
struct PretrainedConfig {
    #[serde(default)]
    id2label: HashMap<usize, String>,
}

impl Config {
    /// Load the label mapping from a pretrained model's `config.json`
    pub fn from_pretrained_file(
        model_name: &str,
        config_file: impl AsRef<Path>,
    ) -> anyhow::Result<Self> {
        let config_file = config_file.as_ref();

        let contents = fs::read_to_string(config_file).map_err(|e| {
            anyhow!(
                "Unable to read model config file {}: {}",
                config_file.display(),
                e
            )
        })?;

        let pretrained: PretrainedConfig = serde_json::from_str(&contents)
            .map_err(|e| anyhow!("Unable to parse model config file: {}", e))?;

        if pretrained.id2label.is_empty() {
            return Err(anyhow!("Classes are not defined in the model configuration"));
        }

        Ok(Config::new(pretrained.id2label).with_model_name(model_name.to_string()))
    }

    /// Download the pretrained model's `config.json` from the Hugging Face Hub and load it
    pub fn from_hub(model_name: &str) -> anyhow::Result<Self> {
        let config_file = download_hf_config(model_name)?;

        Self::from_pretrained_file(model_name, config_file)
    }

    /// The number of classes the model scores
    pub fn num_labels(&self) -> usize {
        self.id2label.len()
    }

    /// A mapping from class name labels to class ids
    pub fn label2id(&self) -> HashMap<String, usize> {
        invert_map(self.id2label.clone())
    }

    /// Class name labels, in id order
    pub fn labels(&self) -> Vec<String> {
        labels_by_id(&self.id2label)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_pretrained_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "architectures": ["RobertaForSequenceClassification"],
                "id2label": {"1": "The thao", "0": "Chinh tri Xa hoi"},
                "label2id": {"Chinh tri Xa hoi": 0, "The thao": 1}
            }"#,
        )
        .unwrap();

        let config = Config::from_pretrained_file("local/model", &path).unwrap();

        assert_eq!(config.model_name, "local/model");
        assert_eq!(config.num_labels(), 2);
        assert_eq!(
            config.labels(),
            vec!["Chinh tri Xa hoi".to_string(), "The thao".to_string()]
        );
        assert_eq!(config.label2id().get("The thao"), Some(&1));
    }

    #[test]
    fn test_missing_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"hidden_size": 768}"#).unwrap();

        let err = Config::from_pretrained_file("local/model", &path)
            .err()
            .unwrap();

        assert!(err.to_string().contains("Classes are not defined"));
    }
}
