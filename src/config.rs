use crate::system::Result;
use std::str::FromStr;
use toml::Value;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputFormat {
    Binary,
    Hex,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" => Ok(InputFormat::Binary),
            "hex" => Ok(InputFormat::Hex),
            _ => Err(format!("Unknown input format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub input_format: InputFormat,
}

impl Config {
    fn new() -> Self {
        Config {
            log_level: "INFO".to_string(),
            input_format: InputFormat::Binary,
        }
    }

    /// Keys not present keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let value: Value = text.parse()?;
        let mut config = Config::new();
        if let Some(level) = value.get("log_level") {
            config.log_level = level.as_str()
                .ok_or("log_level must be a string")?
                .to_string();
        }
        if let Some(format) = value.get("input_format") {
            config.input_format = format.as_str()
                .ok_or("input_format must be a string")?
                .parse()?;
        }
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

/// Defaults when no file is given.
pub async fn init_from_toml(path: Option<&str>) -> Result<Config> {
    match path {
        None => Ok(Config::new()),
        Some(path) => {
            let text = tokio::fs::read_to_string(path).await?;
            Config::from_toml_str(&text)
        }
    }
}
