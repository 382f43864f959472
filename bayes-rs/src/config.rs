use crate::error::{BayesError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub data: DataConfig,
    pub features: FeaturesConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Directory holding the labeled training corpus
    pub train_dir: String,
    /// Directory holding the held-out test corpus
    pub test_dir: String,
    /// Display name for the dataset in reports
    pub dataset: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    /// Fraction of the vocabulary kept by information-gain selection, in (0, 1]
    pub k_best_fraction: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BayesError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| BayesError::Config(e.to_string()))
    }

    /// Reject parameter values the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        let k = self.features.k_best_fraction;
        if !(k > 0.0 && k <= 1.0) {
            return Err(BayesError::Config(format!(
                "k_best_fraction must be in (0, 1], got {k}"
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig {
                train_dir: "data/train".to_string(),
                test_dir: "data/test".to_string(),
                dataset: "Enron-Spam".to_string(),
            },
            features: FeaturesConfig {
                k_best_fraction: 0.9,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_k_fraction_bounds() {
        let mut config = Config::default();

        config.features.k_best_fraction = 1.0;
        assert!(config.validate().is_ok());

        config.features.k_best_fraction = 0.0;
        assert!(config.validate().is_err());

        config.features.k_best_fraction = 1.5;
        assert!(config.validate().is_err());

        config.features.k_best_fraction = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[data]
train_dir = "corpus/train"
test_dir = "corpus/test"
dataset = "Ling-Spam"

[features]
k_best_fraction = 0.5

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.data.dataset, "Ling-Spam");
        assert_eq!(config.features.k_best_fraction, 0.5);
        assert_eq!(config.logging.level, "debug");
    }
}
