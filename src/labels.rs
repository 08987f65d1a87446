use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("failed to read class labels from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no class labels found in {0}")]
    Empty(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassLabels(Vec<String>);

impl ClassLabels {
    // assumed, not checked, to match the order the network was trained with
    pub fn from_dataset_dir(path: &Path) -> Result<Self, LabelError> {
        let io_err = |source| LabelError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            if entry.file_type().map_err(io_err)?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();

        Self::from_names(names, path)
    }

    pub fn from_class_list(path: &Path) -> Result<Self, LabelError> {
        let contents = fs::read_to_string(path).map_err(|source| LabelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let names = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        Self::from_names(names, path)
    }

    fn from_names(names: Vec<String>, source: &Path) -> Result<Self, LabelError> {
        if names.is_empty() {
            return Err(LabelError::Empty(source.to_path_buf()));
        }
        Ok(ClassLabels(names))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }
}

/// Index of the first largest score. NaN scores never win.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}
