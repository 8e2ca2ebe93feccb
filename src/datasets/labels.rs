use std::{collections::HashMap, io, path::Path};

use walkdir::WalkDir;

use crate::utils::classes::invert_map;

use super::CorpusError;

/// The label space of a corpus, discovered from the subdirectory names of a training root
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Labels {
    /// Label names, indexed by label id
    id2label: Vec<String>,

    /// A reverse map from label names to label ids
    label2id: HashMap<String, usize>,
}

impl Labels {
    /// Discover labels from the immediate subdirectories of `root`. Ids are assigned in sorted
    /// name order so that they are stable across platforms.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let root = root.as_ref();
        let labels = list_subdirs(root)?;

        log::info!("Discovered {} labels under {}", labels.len(), root.display());

        Ok(Self::from_names(labels))
    }

    /// Build a label space from names that are already in id order
    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let id2label: Vec<String> = names.into_iter().map(Into::into).collect();
        let label2id = invert_map(id2label.iter().cloned().enumerate());

        Self { id2label, label2id }
    }

    /// The id for a label name, if it is known
    pub fn id(&self, label: &str) -> Option<usize> {
        self.label2id.get(label).copied()
    }

    /// The label name for an id, if it is in range
    pub fn label(&self, id: usize) -> Option<&str> {
        self.id2label.get(id).map(String::as_str)
    }

    /// The number of labels
    pub fn len(&self) -> usize {
        self.id2label.len()
    }

    /// Returns true if there are no labels
    pub fn is_empty(&self) -> bool {
        self.id2label.is_empty()
    }

    /// Label names in id order
    pub fn names(&self) -> &[String] {
        &self.id2label
    }

    /// A map from label ids to label names
    pub fn id2label(&self) -> HashMap<usize, String> {
        self.id2label.iter().cloned().enumerate().collect()
    }

    /// A map from label names to label ids
    pub fn label2id(&self) -> &HashMap<String, usize> {
        &self.label2id
    }
}

/// List the names of the immediate subdirectories of `root`, sorted
pub(crate) fn list_subdirs(root: &Path) -> Result<Vec<String>, CorpusError> {
    list_entries(root, true)
}

/// List the names of the regular files directly inside `dir`, sorted
pub(crate) fn list_files(dir: &Path) -> Result<Vec<String>, CorpusError> {
    list_entries(dir, false)
}

fn list_entries(dir: &Path, dirs: bool) -> Result<Vec<String>, CorpusError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut names = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| walk_error(dir, e))?;

        let wanted = if dirs {
            entry.file_type().is_dir()
        } else {
            entry.file_type().is_file()
        };

        if !wanted {
            log::debug!("Ignoring {}", entry.path().display());
            continue;
        }

        let name = entry
            .file_name()
            .to_os_string()
            .into_string()
            .map_err(|_| CorpusError::InvalidName {
                path: entry.path().to_path_buf(),
            })?;

        names.push(name);
    }

    Ok(names)
}

fn walk_error(dir: &Path, err: walkdir::Error) -> CorpusError {
    let path = err.path().unwrap_or(dir).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop detected"));

    CorpusError::io(path, source)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_discover_sorted_bijection() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("tech")).unwrap();
        fs::create_dir(dir.path().join("sports")).unwrap();
        fs::write(dir.path().join("README"), "not a label").unwrap();

        let labels = Labels::discover(dir.path()).unwrap();

        assert_eq!(labels.names(), &["sports".to_string(), "tech".to_string()]);
        assert_eq!(labels.id("sports"), Some(0));
        assert_eq!(labels.id("tech"), Some(1));

        for (label, id) in labels.label2id() {
            assert_eq!(labels.label(*id), Some(label.as_str()));
        }
        for (id, label) in labels.id2label() {
            assert_eq!(labels.id(&label), Some(id));
        }
    }

    #[test]
    fn test_unknown_lookups() {
        let labels = Labels::from_names(["a", "b"]);

        assert_eq!(labels.id("c"), None);
        assert_eq!(labels.label(2), None);
        assert_eq!(labels.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_rejects_non_utf8_names() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join(OsStr::from_bytes(b"a\xff"));
        fs::create_dir(&bad).unwrap();
        fs::create_dir(dir.path().join(OsStr::from_bytes(b"a\xfe"))).unwrap();

        let err = Labels::discover(dir.path()).unwrap_err();

        assert!(matches!(err, CorpusError::InvalidName { .. }));
    }

    #[test]
    fn test_list_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        assert_eq!(
            list_files(dir.path()).unwrap(),
            vec!["a.txt".to_string(), "b.txt".to_string()]
        );
    }

    #[test]
    fn test_discover_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("train");

        let err = Labels::discover(&missing).unwrap_err();

        assert!(matches!(err, CorpusError::Io { path, .. } if path == missing));
    }
}
