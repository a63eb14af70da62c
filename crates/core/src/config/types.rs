use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::filename::{YearWindow, FIRST_FILM_YEAR};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Filename parser configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Lowest year considered a release year (default: 1888)
    #[serde(default = "default_earliest_year")]
    pub earliest_year: u16,
    /// Years past the current one still accepted (default: 1)
    #[serde(default = "default_future_years")]
    pub future_years: u16,
}

impl ParserConfig {
    pub fn year_window(&self) -> YearWindow {
        YearWindow::ending_after_current_year(self.earliest_year, self.future_years)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            earliest_year: default_earliest_year(),
            future_years: default_future_years(),
        }
    }
}

fn default_earliest_year() -> u16 {
    FIRST_FILM_YEAR
}

fn default_future_years() -> u16 {
    1
}

/// Release group registry configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Persisted release group table. The built-in table is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
