use std::collections::BTreeMap;

use burn::data::dataset::{self, Dataset as _, InMemDataset};
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    reader::{read_dir, ReadOptions},
    Config, CorpusError, Labels, LoadableDataset, Split,
};

/// The name of the VNTC dataset
pub static DATASET: &str = "vntc";

/// A single news document and the id of its label
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Item {
    /// The full text of the document
    pub text: String,

    /// The label id of the document
    pub label: usize,
}

impl From<(String, usize)> for Item {
    fn from((text, label): (String, usize)) -> Self {
        Self { text, label }
    }
}

/// Struct for the VNTC dataset
pub struct Dataset {
    /// Underlying In-Memory dataset
    dataset: InMemDataset<Item>,

    /// The label space shared by every split
    labels: Labels,
}

/// Implement the Dataset trait for the VNTC dataset
impl dataset::Dataset<Item> for Dataset {
    /// Returns a specific item from the dataset
    fn get(&self, index: usize) -> Option<Item> {
        self.dataset.get(index)
    }

    /// Returns the length of the dataset
    fn len(&self) -> usize {
        self.dataset.len()
    }
}

impl LoadableDataset<Item> for Dataset {
    fn load(config: &Config, labels: &Labels, split: Split) -> Result<Self, CorpusError> {
        Dataset::load(config, labels, split)
    }
}

// Implement methods for constructing the VNTC dataset
impl Dataset {
    /// Constructs the dataset for a split, using a label space discovered from the training root
    pub fn load(config: &Config, labels: &Labels, split: Split) -> Result<Self, CorpusError> {
        let root = config.root(split);
        let options = ReadOptions {
            encoding: config.encoding,
            unknown_labels: config.unknown_labels,
        };

        let items: Vec<Item> = read_dir(&root, labels, options)?
            .into_iter()
            .map(Item::from)
            .collect();

        log::info!(
            "Loaded {} documents from {} ({:?})",
            items.len(),
            root.display(),
            split
        );

        Ok(Self {
            dataset: InMemDataset::new(items),
            labels: labels.clone(),
        })
    }

    /// Returns the item at `index`, or an out-of-range error
    pub fn at(&self, index: usize) -> Result<Item, CorpusError> {
        self.get(index).ok_or(CorpusError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// The label space of the dataset
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Returns the number of documents for each label name
    pub fn label_counts(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = self
            .labels
            .names()
            .iter()
            .map(|name| (name.clone(), 0))
            .collect();

        for item in self.iter() {
            if let Some(name) = self.labels.label(item.label) {
                *counts.entry(name.to_string()).or_default() += 1;
            }
        }

        counts
    }

    /// Returns random (text, label name) samples from the dataset
    pub fn get_samples(&self, count: usize) -> Vec<(String, String)> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut rng = rand::thread_rng();

        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            let i = rng.gen_range(0..self.len());

            if let Some(item) = self.get(i) {
                let label = self.labels.label(item.label).unwrap_or_default();
                samples.push((item.text, label.to_string()));
            }
        }

        samples
    }
}
