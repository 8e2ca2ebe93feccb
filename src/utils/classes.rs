use std::{collections::HashMap, hash::Hash};

/// Invert a map by swapping keys and values
pub fn invert_map<K, V, MK, MV>(original: MK) -> MV
where
    K: Hash + Eq,
    V: Hash + Eq,
    MK: IntoIterator<Item = (K, V)>,
    MV: FromIterator<(V, K)>,
{
    original
        .into_iter()
        .map(|(key, value)| (value, key))
        .collect()
}

/// Class names from an id map, ordered by class id
pub fn labels_by_id(id2label: &HashMap<usize, String>) -> Vec<String> {
    let mut labels: Vec<_> = id2label.iter().collect();
    labels.sort_by_key(|(id, _)| **id);

    labels.into_iter().map(|(_, label)| label.clone()).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_invert_map() {
        let id2label = HashMap::from([(0, "Doi song".to_string()), (1, "Khoa hoc".to_string())]);

        let label2id: BTreeMap<String, usize> = invert_map(id2label);

        assert_eq!(
            label2id,
            BTreeMap::from([("Doi song".to_string(), 0), ("Khoa hoc".to_string(), 1)])
        );
    }

    #[test]
    fn test_labels_by_id() {
        let id2label = HashMap::from([
            (2, "Vi tinh".to_string()),
            (0, "Am nhac".to_string()),
            (1, "The thao".to_string()),
        ]);

        assert_eq!(
            labels_by_id(&id2label),
            vec!["Am nhac".to_string(), "The thao".to_string(), "Vi tinh".to_string()]
        );
    }
}
