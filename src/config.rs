use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;

use crate::preprocess::TensorLayout;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{name} must be {expected}, got {value:?}")]
pub struct ConfigError {
    name: &'static str,
    expected: &'static str,
    value: String,
}

/// Where the frozen graph lives and how to feed it.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub path: PathBuf,
    /// Download source used when `path` does not exist yet.
    pub url: Option<String>,
    pub input_op: String,
    pub output_op: String,
    pub layout: TensorLayout,
    pub image_size: u32,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
    pub model: ModelConfig,
    pub dataset_path: PathBuf,
    /// Overrides `dataset_path` as the label source when set.
    pub class_list_path: Option<PathBuf>,
    pub upload_dir: PathBuf,
    pub upload_retention: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let body_limit_mb: usize = parse(&lookup, "BODY_LIMIT_MB", 5, "a whole number of megabytes")?;
        let body_limit_bytes = body_limit_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| invalid("BODY_LIMIT_MB", "a whole number of megabytes", body_limit_mb))?;
        let image_size: u32 = parse(&lookup, "IMAGE_SIZE", 128, "a positive pixel count")?;
        if image_size == 0 {
            return Err(invalid("IMAGE_SIZE", "a positive pixel count", "0"));
        }

        let layout = match lookup("TENSOR_LAYOUT") {
            Some(value) => TensorLayout::parse(&value)
                .ok_or_else(|| invalid("TENSOR_LAYOUT", "`nchw` or `nhwc`", &value))?,
            None => TensorLayout::default(),
        };

        let upload_retention = match lookup("UPLOAD_RETENTION_SECS") {
            Some(value) => Some(Duration::from_secs(value.parse().map_err(|_| {
                invalid("UPLOAD_RETENTION_SECS", "a number of seconds", &value)
            })?)),
            None => None,
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse(&lookup, "PORT", 5000, "a valid number between 0 and 65535")?,
            body_limit_bytes,
            model: ModelConfig {
                path: lookup("MODEL_PATH")
                    .unwrap_or_else(|| "./model/plant_disease_cnn.pb".into())
                    .into(),
                url: lookup("MODEL_URL"),
                input_op: lookup("MODEL_INPUT_OP").unwrap_or_else(|| "x".into()),
                output_op: lookup("MODEL_OUTPUT_OP").unwrap_or_else(|| "Identity".into()),
                layout,
                image_size,
            },
            dataset_path: lookup("DATASET_PATH")
                .unwrap_or_else(|| "plant_data".into())
                .into(),
            class_list_path: lookup("CLASS_LIST_PATH").map(PathBuf::from),
            upload_dir: lookup("UPLOAD_DIR")
                .unwrap_or_else(|| "static/uploads".into())
                .into(),
            upload_retention,
        })
    }
}

fn parse<F, T>(lookup: &F, name: &'static str, default: T, expected: &'static str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value.parse().map_err(|_| invalid(name, expected, &value)),
        None => Ok(default),
    }
}

fn invalid(name: &'static str, expected: &'static str, value: impl Display) -> ConfigError {
    ConfigError {
        name,
        expected,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.body_limit_bytes, 5 * 1024 * 1024);
        assert_eq!(config.model.image_size, 128);
        assert_eq!(config.model.layout, TensorLayout::Nchw);
        assert_eq!(config.model.input_op, "x");
        assert_eq!(config.model.output_op, "Identity");
        assert_eq!(config.dataset_path, PathBuf::from("plant_data"));
        assert_eq!(config.upload_dir, PathBuf::from("static/uploads"));
        assert!(config.class_list_path.is_none());
        assert!(config.upload_retention.is_none());
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("BODY_LIMIT_MB", "2"),
            ("TENSOR_LAYOUT", "NHWC"),
            ("UPLOAD_RETENTION_SECS", "3600"),
            ("CLASS_LIST_PATH", "labels.txt"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.body_limit_bytes, 2 * 1024 * 1024);
        assert_eq!(config.model.layout, TensorLayout::Nhwc);
        assert_eq!(config.upload_retention, Some(Duration::from_secs(3600)));
        assert_eq!(config.class_list_path, Some(PathBuf::from("labels.txt")));
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = config_from(&[("PORT", "99999")]).unwrap_err();
        assert!(err.to_string().starts_with("PORT must be"));

        let err = config_from(&[("TENSOR_LAYOUT", "chw")]).unwrap_err();
        assert!(err.to_string().contains("TENSOR_LAYOUT"));

        assert!(config_from(&[("IMAGE_SIZE", "0")]).is_err());
        assert!(config_from(&[("UPLOAD_RETENTION_SECS", "soon")]).is_err());
    }

    #[test]
    fn oversized_body_limit_is_rejected_instead_of_overflowing() {
        let huge = usize::MAX.to_string();
        let err = config_from(&[("BODY_LIMIT_MB", huge.as_str())]).unwrap_err();
        assert!(err.to_string().starts_with("BODY_LIMIT_MB must be"));
    }
}
