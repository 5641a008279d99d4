//! Configuration types.
//!
//! `Listing` holds the compile-time constants of one scraper instance.
//! `DbConfig` and `LogFormat` are read from the environment at startup; the
//! binary takes no command-line flags.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use strum_macros::{Display, EnumString};
use thiserror::Error;

use crate::config::constants::{DEFAULT_DB_PORT, DEFAULT_DB_TABLE, PAGE_SIZE};

/// Constants identifying one product vertical on one store.
///
/// A deployment runs one binary per listing; `category` and `store` are
/// copied verbatim into every stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    /// Search query with filters, facets, locale and sort baked in.
    /// The running `start` offset is appended to it per page.
    pub base_url: &'static str,
    /// Value of the `category` column
    pub category: &'static str,
    /// Value of the `store` column
    pub store: &'static str,
    /// Offset increment between pages; must match the `rows` parameter of `base_url`
    pub page_size: u64,
}

/// Tablets on the extra.com Saudi storefront (Riyadh stock rules).
pub const TABLETS: Listing = Listing {
    base_url: "https://search.unbxd.io/21705619e273429e5767eea44ccb1ad5/ss-unbxd-auk-extra-saudi-en-prod11541714990488/category?stats=price&selectedfacet=true&facet.multiselect=true&page=2&rows=96&bfrule=inStockCities%3A%22SA-riyadh%22+OR+sellingOutFastCities%3A%22SA-riyadh%22+OR+restockableCities%3ASA-riyadh&boost=if%28eq%28query%28%24bfrule%29%2Cfalse%29%2C0%2C1%29&filter=familyEn_uFilter%3ATablets&filter=type%3APRODUCT&p=categories_uFilter%3A%222%22&pagetype=boolean&facet=true&version=V2&uid=uid-1726931238891-10989",
    category: "tablets",
    store: "extra",
    page_size: PAGE_SIZE,
};

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
///
/// Read from the `LOG_FORMAT` environment variable (case-insensitive).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    #[default]
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

impl LogFormat {
    /// Reads `LOG_FORMAT`, falling back to `Plain` when unset or unrecognized.
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

/// Errors in the externally supplied database configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set (or is empty).
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    /// `DB_PORT` is not a valid TCP port.
    #[error("Invalid DB_PORT value: {0:?}")]
    InvalidPort(String),

    /// `DB_TABLE` is not a plain (optionally schema-qualified) SQL identifier.
    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),
}

static TABLE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$")
        .expect("table name pattern is valid")
});

/// Connection parameters and target table for the batch persister.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Database server host
    pub host: String,
    /// Database server port
    pub port: u16,
    /// Database name
    pub dbname: String,
    /// Login role
    pub user: String,
    /// Login password
    pub password: String,
    /// Table the records are inserted into
    pub tablename: String,
}

impl DbConfig {
    /// Reads `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`, `DB_PASSWORD` and
    /// `DB_TABLE` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `DB_PORT` defaults to 5432 and `DB_TABLE` to `test`; every other key is
    /// required. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::MissingVar(key));

        let port = match get("DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_DB_PORT,
        };

        let tablename = get("DB_TABLE").unwrap_or_else(|| DEFAULT_DB_TABLE.to_string());
        validate_table_name(&tablename)?;

        Ok(DbConfig {
            host: require("DB_HOST")?,
            port,
            dbname: require("DB_NAME")?,
            user: require("DB_USER")?,
            password: require("DB_PASSWORD")?,
            tablename,
        })
    }
}

/// Checks that `name` can be interpolated into SQL as a table identifier.
pub(crate) fn validate_table_name(name: &str) -> Result<(), ConfigError> {
    if TABLE_NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(ConfigError::InvalidTableName(name.to_string()))
    }
}

// Keeps the password out of logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"***")
            .field("tablename", &self.tablename)
            .finish()
    }
}
