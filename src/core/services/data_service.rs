use std::path::Path;

use crate::config::Config;
use crate::storage::{builtin, load_dataset_from_path, save_dataset_to_path, Dataset};

use super::{ServiceError, ServiceResult};

/// Chooses and manages the data set backing the screens.
pub struct DataService;

impl DataService {
    /// Loads the dataset named by `config.dataset_path`, or the built-in one.
    pub fn open(config: &Config) -> ServiceResult<Dataset> {
        match &config.dataset_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(ServiceError::Invalid(format!(
                        "dataset file `{}` does not exist",
                        path.display()
                    )));
                }
                Ok(load_dataset_from_path(path)?)
            }
            None => Ok(builtin().clone()),
        }
    }

    /// Writes `dataset` to `path` so it can be edited and loaded back.
    pub fn export(dataset: &Dataset, path: &Path) -> ServiceResult<()> {
        if path.is_dir() {
            return Err(ServiceError::Invalid(format!(
                "`{}` is a directory",
                path.display()
            )));
        }
        save_dataset_to_path(dataset, path)?;
        Ok(())
    }
}
