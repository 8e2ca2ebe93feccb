use std::{fmt::Display, path::PathBuf};

use serde::{Deserialize, Serialize};

use super::Split;

/// The text encoding used by the corpus files
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// UTF-16 with byte order mark detection, falling back to little-endian
    Utf16,

    /// UTF-16, little-endian, no byte order mark expected
    Utf16Le,

    /// UTF-16, big-endian, no byte order mark expected
    Utf16Be,

    /// UTF-8
    Utf8,
}

impl Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Encoding::Utf16 => "utf-16",
            Encoding::Utf16Le => "utf-16-le",
            Encoding::Utf16Be => "utf-16-be",
            Encoding::Utf8 => "utf-8",
        };

        write!(f, "{}", name)
    }
}

impl TryFrom<&str> for Encoding {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().replace('_', "-").as_str() {
            "utf-16" | "utf16" => Ok(Encoding::Utf16),
            "utf-16-le" | "utf-16le" => Ok(Encoding::Utf16Le),
            "utf-16-be" | "utf-16be" => Ok(Encoding::Utf16Be),
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            _ => Err(format!("unsupported encoding {}", value)),
        }
    }
}

/// What to do with an evaluation document whose label is not in the training label space
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownLabelPolicy {
    /// Abort the load with an error
    Fail,

    /// Leave the document out and log a warning
    Skip,
}

/// Corpus configuration
#[derive(burn::config::Config)]
pub struct Config {
    /// The top-level data directory
    #[config(default = "\"data\".to_string()")]
    pub data_dir: String,

    /// The training root, relative to the data directory
    #[config(default = "\"train\".to_string()")]
    pub train_dir: String,

    /// The evaluation root, relative to the data directory
    #[config(default = "\"test\".to_string()")]
    pub test_dir: String,

    /// The encoding of every document file
    #[config(default = "Encoding::Utf16")]
    pub encoding: Encoding,

    /// Handling for evaluation labels that are missing from the training root
    #[config(default = "UnknownLabelPolicy::Fail")]
    pub unknown_labels: UnknownLabelPolicy,
}

impl Config {
    /// The root directory for the given split
    pub fn root(&self, split: Split) -> PathBuf {
        let dir = match split {
            Split::Train => &self.train_dir,
            Split::Test => &self.test_dir,
        };

        PathBuf::from(&self.data_dir).join(dir)
    }

    /// The root that anchors the label space
    pub fn train_root(&self) -> PathBuf {
        self.root(Split::Train)
    }
}

#[cfg(test)]
mod tests {
    use burn::config::Config as _;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();

        assert_eq!(config.root(Split::Train), PathBuf::from("data/train"));
        assert_eq!(config.root(Split::Test), PathBuf::from("data/test"));
        assert_eq!(config.encoding, Encoding::Utf16);
        assert_eq!(config.unknown_labels, UnknownLabelPolicy::Fail);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");

        let config = Config::new()
            .with_data_dir("corpora/vntc".to_string())
            .with_encoding(Encoding::Utf8)
            .with_unknown_labels(UnknownLabelPolicy::Skip);
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded.train_root(), PathBuf::from("corpora/vntc/train"));
        assert_eq!(loaded.encoding, Encoding::Utf8);
        assert_eq!(loaded.unknown_labels, UnknownLabelPolicy::Skip);
    }

    #[test]
    fn test_encoding_names() {
        assert_eq!(Encoding::try_from("UTF-16"), Ok(Encoding::Utf16));
        assert_eq!(Encoding::try_from("utf_16_be"), Ok(Encoding::Utf16Be));
        assert_eq!(Encoding::try_from("utf8"), Ok(Encoding::Utf8));
        assert!(Encoding::try_from("latin-1").is_err());
        assert_eq!(Encoding::Utf16Le.to_string(), "utf-16-le");
    }
}
