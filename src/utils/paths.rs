use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const DEFAULT_DIR_NAME: &str = ".spendsphere";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const HISTORY_FILE: &str = "history.txt";
const TMP_SUFFIX: &str = "tmp";

pub const HOME_ENV: &str = "SPENDSPHERE_HOME";

/// Application data directory: `$SPENDSPHERE_HOME`, else `~/.spendsphere`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Shell history lives next to the config directory.
pub fn history_file_in(base: &Path) -> PathBuf {
    base.join(HISTORY_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Staging file used by [`write_atomic`], e.g. `data.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to a sibling temp file and renames it over `path`, so a
/// failed write never leaves a truncated target behind.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn tmp_path_keeps_original_extension() {
        assert_eq!(
            tmp_path(Path::new("/data/dataset.json")),
            PathBuf::from("/data/dataset.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("/data/chart")), PathBuf::from("/data/chart.tmp"));
    }

    #[test]
    fn atomic_write_replaces_file_and_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("chart.svg");
        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn failed_write_preserves_original() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        write_atomic(&path, "original").unwrap();
        // a directory in the staging slot makes File::create fail
        fs::create_dir_all(tmp_path(&path)).unwrap();
        assert!(write_atomic(&path, "replacement").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }
}
