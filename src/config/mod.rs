use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::services::chart_service::ChartGeometry,
    domain::{AccountSelector, Period},
    errors::{Result, SpendError},
    utils::paths::{app_data_dir, config_file_in, ensure_dir, write_atomic},
};

/// Keys accepted by [`Config::apply_setting`].
pub const SETTING_KEYS: [&str; 8] = [
    "locale",
    "currency_symbol",
    "display_year",
    "initial_month",
    "initial_account",
    "chart_radius",
    "chart_stroke",
    "dataset_path",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency_symbol: String,
    pub display_year: i32,
    pub initial_month: Period,
    pub initial_account: AccountSelector,
    pub chart: ChartGeometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "ru-RU".into(),
            currency_symbol: "$".into(),
            display_year: 2024,
            initial_month: Period::default(),
            initial_account: AccountSelector::Combined,
            chart: ChartGeometry::default(),
            dataset_path: None,
        }
    }
}

impl Config {
    /// Updates one setting from its textual form.
    pub fn apply_setting(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "locale" => self.locale = value.to_string(),
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "display_year" => self.display_year = parse_number(key, value)?,
            "initial_month" => self.initial_month = Period::new(parse_number(key, value)?)?,
            "initial_account" => self.initial_account = value.parse()?,
            "chart_radius" => {
                let radius: f64 = parse_number(key, value)?;
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(SpendError::Config("chart_radius must be a positive number".into()));
                }
                self.chart.radius = radius;
            }
            "chart_stroke" => {
                let stroke: f64 = parse_number(key, value)?;
                if !stroke.is_finite() || stroke < 0.0 {
                    return Err(SpendError::Config("chart_stroke must not be negative".into()));
                }
                self.chart.stroke_width = stroke;
            }
            "dataset_path" => {
                self.dataset_path = match value {
                    "" | "builtin" | "none" => None,
                    path => Some(PathBuf::from(path)),
                }
            }
            other => {
                return Err(SpendError::Config(format!(
                    "unknown setting `{}` (expected one of: {})",
                    other,
                    SETTING_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| SpendError::Config(format!("`{}` is not a valid value for {}", value, key)))
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        let path = config_file_in(&base);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardAccount;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.initial_month.month(), 9);
    }

    #[test]
    fn saved_settings_survive_reload() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let mut config = Config::default();
        config.apply_setting("initial_account", "visa").unwrap();
        config.apply_setting("initial_month", "10").unwrap();
        config.apply_setting("currency_symbol", "₽").unwrap();
        manager.save(&config).unwrap();

        let reloaded = manager.load().unwrap();
        assert_eq!(
            reloaded.initial_account,
            AccountSelector::Card(CardAccount::Visa)
        );
        assert_eq!(reloaded.initial_month.month(), 10);
        assert_eq!(reloaded.currency_symbol, "₽");
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let mut config = Config::default();
        assert!(matches!(
            config.apply_setting("initial_month", "13"),
            Err(SpendError::InvalidPeriod(13))
        ));
        assert!(config.apply_setting("chart_radius", "-5").is_err());
        assert!(config.apply_setting("chart_radius", "NaN").is_err());
        assert!(config.apply_setting("chart_radius", "inf").is_err());
        assert!(config.apply_setting("chart_stroke", "NaN").is_err());
        assert!(config.apply_setting("theme", "dark").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"display_year": 2025}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.display_year, 2025);
        assert_eq!(config.currency_symbol, "$");
    }
}
