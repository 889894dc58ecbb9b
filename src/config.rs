//! User configuration loaded from `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculator::ErrorStyle;
use crate::format::{MAX_FRACTION_DIGITS, NumberFormat};
use crate::keys::Key;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub decimal_separator: char,
    pub max_fraction_digits: usize,
    /// Text shown for any failed evaluation.
    pub error_text: String,
    /// Name the failure (`Overflow`, `Division by zero`) instead of showing `error_text`.
    pub distinguish_errors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let format = NumberFormat::default();
        let errors = ErrorStyle::default();
        Self {
            decimal_separator: format.decimal_separator,
            max_fraction_digits: format.max_fraction_digits,
            error_text: errors.text,
            distinguish_errors: errors.distinguish,
        }
    }
}

impl DisplayConfig {
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.decimal_separator, self.max_fraction_digits)
    }

    pub fn error_style(&self) -> ErrorStyle {
        ErrorStyle {
            text: self.error_text.clone(),
            distinguish: self.distinguish_errors,
        }
    }
}

impl Config {
    /// Default location, `<config dir>/tallycalc/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tallycalc")
            .join("config.toml")
    }

    /// Load the config at `path`, or the defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject display settings the keypad cannot work with.
    ///
    /// The separator must not be a digit, whitespace or another key's label.
    pub fn validate(&self) -> Result<()> {
        let separator = self.display.decimal_separator;
        let is_other_key = matches!(Key::from_label(separator), Some(key) if key != Key::Separator);
        if separator.is_whitespace() || is_other_key {
            anyhow::bail!("Invalid decimal separator {:?}", separator);
        }
        if self.display.max_fraction_digits > MAX_FRACTION_DIGITS {
            anyhow::bail!(
                "max_fraction_digits must be at most {}, got {}",
                MAX_FRACTION_DIGITS,
                self.display.max_fraction_digits
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults() {
        let path = std::env::temp_dir().join("tallycalc-missing-config-test.toml");
        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.decimal_separator, ',');
        assert_eq!(config.display.max_fraction_digits, 3);
        assert_eq!(config.display.error_text, "Error");
        assert!(!config.display.distinguish_errors);
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml("[display]\ndecimal_separator = \".\"\n").unwrap();
        assert_eq!(config.display.decimal_separator, '.');
        assert_eq!(config.display.max_fraction_digits, 3);
        assert_eq!(config.display.number_format(), NumberFormat::new('.', 3));
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_error_style() {
        let config = Config::from_toml(
            "[display]\nerror_text = \"Ошибка\"\ndistinguish_errors = true\n",
        )
        .unwrap();
        let style = config.display.error_style();
        assert_eq!(style.text, "Ошибка");
        assert!(style.distinguish);
    }

    #[test]
    fn test_invalid_separator() {
        assert!(Config::from_toml("[display]\ndecimal_separator = \"5\"\n").is_err());
        assert!(Config::from_toml("[display]\ndecimal_separator = \"ab\"\n").is_err());
        for label in ["+", "-", "X", "/", "=", "C", " "] {
            let toml = format!("[display]\ndecimal_separator = \"{}\"\n", label);
            assert!(Config::from_toml(&toml).is_err(), "accepted {:?}", label);
        }
        assert!(Config::from_toml("[display]\ndecimal_separator = \".\"\n").is_ok());
        assert!(Config::from_toml("[display]\ndecimal_separator = \"'\"\n").is_ok());
    }

    #[test]
    fn test_fraction_digits_bounded() {
        assert!(Config::from_toml("[display]\nmax_fraction_digits = 17\n").is_ok());
        assert!(Config::from_toml("[display]\nmax_fraction_digits = 18\n").is_err());
        assert!(Config::from_toml("[display]\nmax_fraction_digits = 70000\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("tallycalc-config-{}.toml", std::process::id()));
        fs::write(&path, "[display]\nmax_fraction_digits = 6\n").unwrap();
        let config = Config::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.display.max_fraction_digits, 6);
    }
}
