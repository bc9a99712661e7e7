use std::{fs, path::Path};

use crate::errors::{Result, SpendError};
use crate::utils::paths::write_atomic;

use super::Dataset;

/// Loads a dataset file. Files with no data at all, or with amounts the
/// chart cannot represent, are rejected.
pub fn load_dataset_from_path(path: &Path) -> Result<Dataset> {
    let data = fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&data)?;
    if dataset.categories.is_empty() && dataset.payments.is_empty() {
        return Err(SpendError::Dataset(format!(
            "`{}` contains no categories or payments",
            path.display()
        )));
    }
    dataset.validate().map_err(|err| match err {
        SpendError::Dataset(reason) => {
            SpendError::Dataset(format!("`{}`: {}", path.display(), reason))
        }
        other => other,
    })?;
    tracing::info!(
        path = %path.display(),
        months = dataset.periods().len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Writes the dataset as pretty JSON, staging to a temporary file first.
pub fn save_dataset_to_path(dataset: &Dataset, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(dataset)?;
    write_atomic(path, &json)?;
    tracing::info!(path = %path.display(), "saved dataset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::builtin;
    use crate::utils::paths::tmp_path;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_preserves_dataset() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("dataset.json");
        save_dataset_to_path(builtin(), &path).expect("save dataset");
        assert!(!tmp_path(&path).exists());

        let loaded = load_dataset_from_path(&path).expect("load dataset");
        assert_eq!(&loaded, builtin());
    }

    #[test]
    fn empty_dataset_file_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("empty.json");
        fs::write(&path, "{}").expect("write");
        let err = load_dataset_from_path(&path).expect_err("empty dataset should fail");
        assert!(matches!(err, SpendError::Dataset(_)));
    }

    #[test]
    fn rejection_names_the_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("negative.json");
        let json = r##"{"categories":{"visa":{"9":[
            {"name":"Продукты","icon":"fast-food-outline","color":"#FF6384","spend":-5}
        ]}}}"##;
        fs::write(&path, json).expect("write");
        let err = load_dataset_from_path(&path).expect_err("negative spend should fail");
        let message = err.to_string();
        assert!(message.contains("negative.json"), "{message}");
        assert!(message.contains("Продукты"), "{message}");
    }
}
