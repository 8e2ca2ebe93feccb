use std::{fs, path::Path};

use super::{
    labels::{list_files, list_subdirs},
    CorpusError, Encoding, Labels, UnknownLabelPolicy,
};

/// Options that control how a root directory is read
#[derive(Clone, Copy, Debug)]
pub struct ReadOptions {
    /// The encoding of every document file
    pub encoding: Encoding,

    /// Handling for labels that are missing from the label space
    pub unknown_labels: UnknownLabelPolicy,
}

/// Read `root/label/file_name` in full and pair it with the id of `label`
pub fn read_file(
    root: &Path,
    label: &str,
    file_name: &str,
    labels: &Labels,
    encoding: Encoding,
) -> Result<(String, usize), CorpusError> {
    let id = labels.id(label).ok_or_else(|| CorpusError::UnknownLabel {
        label: label.to_string(),
        root: root.to_path_buf(),
    })?;

    let path = root.join(label).join(file_name);
    let bytes = fs::read(&path).map_err(|e| CorpusError::io(&path, e))?;
    let text = decode(&bytes, encoding).ok_or(CorpusError::Decode { path, encoding })?;

    Ok((text, id))
}

/// Read every file of every label directory under `root`, in sorted label then file order
pub fn read_dir(
    root: &Path,
    labels: &Labels,
    options: ReadOptions,
) -> Result<Vec<(String, usize)>, CorpusError> {
    let mut data = Vec::new();

    for label in list_subdirs(root)? {
        if labels.id(&label).is_none() {
            match options.unknown_labels {
                UnknownLabelPolicy::Fail => {
                    return Err(CorpusError::UnknownLabel {
                        label,
                        root: root.to_path_buf(),
                    });
                }
                UnknownLabelPolicy::Skip => {
                    log::warn!(
                        "Skipping label {} under {}: not in the training label set",
                        label,
                        root.display()
                    );
                    continue;
                }
            }
        }

        let files = list_files(&root.join(&label))?;
        log::debug!("Reading {} files for label {}", files.len(), label);

        for file_name in files {
            data.push(read_file(root, &label, &file_name, labels, options.encoding)?);
        }
    }

    Ok(data)
}

/// Decode raw file bytes. Returns `None` when the bytes are invalid for the encoding.
pub fn decode(bytes: &[u8], encoding: Encoding) -> Option<String> {
    match encoding {
        Encoding::Utf8 => String::from_utf8(bytes.to_vec()).ok(),
        Encoding::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
        Encoding::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
        Encoding::Utf16 => match bytes {
            [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
            [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
            _ => decode_utf16(bytes, u16::from_le_bytes),
        },
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();

    String::from_utf16(&units).ok()
}
