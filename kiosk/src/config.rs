//! Kiosk configuration module.
//!
//! This module provides configuration loading for the kiosk from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `KIOSK_BOOKS_FILE`: Books file loaded at startup (default: `books.csv`)
//! - `KIOSK_DELIMITER`: Single ASCII character field delimiter (default: `,`)
//!
//! # Invariants
//!
//! - `delimiter` is an ASCII byte other than a double quote, carriage
//!   return or line feed

use std::path::PathBuf;

/// Kiosk configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskConfig {
    /// Books file loaded into the catalog at startup.
    /// A missing file starts the kiosk with an empty catalog.
    pub books_file: PathBuf,
    /// Field delimiter of the books file.
    pub delimiter: u8,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            books_file: PathBuf::from(Self::DEFAULT_BOOKS_FILE),
            delimiter: Self::DEFAULT_DELIMITER,
        }
    }
}

impl KioskConfig {
    /// Default books file.
    pub const DEFAULT_BOOKS_FILE: &'static str = "books.csv";
    /// Default field delimiter.
    pub const DEFAULT_DELIMITER: u8 = b',';

    const BOOKS_FILE_VAR: &'static str = "KIOSK_BOOKS_FILE";
    const DELIMITER_VAR: &'static str = "KIOSK_DELIMITER";

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `KIOSK_DELIMITER` is set but is not exactly one
    /// usable ASCII character.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let books_file = lookup(Self::BOOKS_FILE_VAR)
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from(Self::DEFAULT_BOOKS_FILE), PathBuf::from);

        let delimiter = match lookup(Self::DELIMITER_VAR) {
            Some(value) => Self::parse_delimiter(&value)?,
            None => Self::DEFAULT_DELIMITER,
        };

        Ok(Self {
            books_file,
            delimiter,
        })
    }

    fn parse_delimiter(value: &str) -> Result<u8, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            name: Self::DELIMITER_VAR.to_string(),
            message,
        };

        let mut chars = value.chars();
        let (Some(delimiter), None) = (chars.next(), chars.next()) else {
            return Err(invalid(format!("'{value}' must be exactly one character")));
        };
        let Ok(byte) = u8::try_from(delimiter) else {
            return Err(invalid(format!("{delimiter:?} is not an ASCII character")));
        };
        if !byte.is_ascii() || matches!(byte, b'"' | b'\r' | b'\n') {
            return Err(invalid(format!("{delimiter:?} cannot be used as a delimiter")));
        }
        Ok(byte)
    }
}
