use std::{collections::HashMap, fmt::Display};

use super::Prediction;

/// Scores for every class label of a single text, highest score first
#[derive(Clone, Debug, PartialEq)]
pub struct Scores(Vec<Prediction>);

impl Scores {
    /// Create a new set of scores, sorting by descending score
    pub fn new(mut predictions: Vec<Prediction>) -> Self {
        predictions.sort_by(|a, b| b.score.total_cmp(&a.score));

        Self(predictions)
    }

    /// The highest scoring prediction
    pub fn top(&self) -> Option<&Prediction> {
        self.0.first()
    }

    /// The number of scored labels
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing was scored
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over predictions, highest score first
    pub fn iter(&self) -> impl Iterator<Item = &Prediction> {
        self.0.iter()
    }

    /// A map from class name labels to scores
    pub fn to_map(&self) -> HashMap<String, f32> {
        self.0
            .iter()
            .map(|prediction| (prediction.label.clone(), prediction.score))
            .collect()
    }
}

impl Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .0
            .iter()
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0);

        for prediction in &self.0 {
            let padding = width - prediction.label.chars().count();

            writeln!(
                f,
                "{}{}  {:>6.2}%",
                prediction.label,
                " ".repeat(padding),
                prediction.score * 100.0
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scores() -> Scores {
        Scores::new(vec![
            Prediction::new("Vi tinh".to_string(), 0.25),
            Prediction::new("The thao".to_string(), 0.75),
        ])
    }

    #[test]
    fn test_sorted_descending() {
        let labels: Vec<_> = scores().iter().map(|p| p.label.clone()).collect();

        assert_eq!(labels, vec!["The thao".to_string(), "Vi tinh".to_string()]);
    }

    #[test]
    fn test_to_map() {
        let map = scores().to_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Vi tinh"), Some(&0.25));
    }

    #[test]
    fn test_render() {
        assert_eq!(
            scores().to_string(),
            "The thao   75.00%\nVi tinh    25.00%\n"
        );
    }
}
