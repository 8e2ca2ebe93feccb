use std::path::PathBuf;

/// The VNTC news corpus
pub mod vntc;

/// Label discovery
pub mod labels;

/// Per-file reading and directory traversal
pub mod reader;

/// Corpus configuration
pub mod config;

pub use config::{Config, Encoding, UnknownLabelPolicy};
pub use labels::Labels;

/// A dataset which can be loaded from a directory tree, using a label space discovered ahead
/// of time
pub trait LoadableDataset<I>: burn::data::dataset::Dataset<I> {
    /// Load the dataset
    fn load(config: &Config, labels: &Labels, split: Split) -> Result<Self, CorpusError>
    where
        Self: std::marker::Sized;
}

/// Which split of the corpus to read
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Split {
    /// The training split, which also anchors the label space
    Train,

    /// The evaluation split
    Test,
}

impl From<bool> for Split {
    /// `true` selects the training split
    fn from(train: bool) -> Self {
        if train {
            Split::Train
        } else {
            Split::Test
        }
    }
}

/// Corpus Error
#[derive(thiserror::Error, Debug)]
pub enum CorpusError {
    /// A file or directory could not be listed or read
    #[error("unable to read {}: {source}", path.display())]
    Io {
        /// The path being read
        path: PathBuf,

        /// The underlying error
        source: std::io::Error,
    },

    /// A label or file name that is not valid UTF-8
    #[error("{} is not a valid UTF-8 name", path.display())]
    InvalidName {
        /// The entry with the invalid name
        path: PathBuf,
    },

    /// A file's bytes are not valid under the configured encoding
    #[error("unable to decode {} as {encoding}", path.display())]
    Decode {
        /// The file being decoded
        path: PathBuf,

        /// The encoding that was expected
        encoding: Encoding,
    },

    /// A label directory that is missing from the training label space
    #[error("label {label} under {} is not in the training label set", root.display())]
    UnknownLabel {
        /// The unknown label
        label: String,

        /// The root directory that contains it
        root: PathBuf,
    },

    /// A document index outside of the corpus
    #[error("index {index} is out of range for a corpus of {len} documents")]
    OutOfRange {
        /// The requested index
        index: usize,

        /// The corpus length
        len: usize,
    },
}

impl CorpusError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_from_bool() {
        assert_eq!(Split::from(true), Split::Train);
        assert_eq!(Split::from(false), Split::Test);
    }
}
