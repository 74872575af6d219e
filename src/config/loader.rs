//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, SchemeSettings, TaxTable};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query scheme settings and tax tables.
///
/// # Directory Structure
///
/// ```text
/// config/uk_paye/
/// ├── scheme.yaml          # Standard cap, default tax code
/// └── tax_years/
///     └── 2024-04-06.yaml  # Tax table effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/uk_paye").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
/// let table = loader.get_tax_table(date).unwrap();
/// println!("Tax year: {}", table.label);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `scheme.yaml` or the `tax_years` directory is
    /// missing, if any file contains invalid YAML, or if no tax table is
    /// present.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let scheme = Self::load_yaml::<SchemeSettings>(&path.join("scheme.yaml"))?;
        let tax_tables = Self::load_tax_tables(&path.join("tax_years"))?;

        Ok(Self {
            config: PayrollConfig::new(scheme, tax_tables),
        })
    }

    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn load_tax_tables(dir: &Path) -> EngineResult<Vec<TaxTable>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut tables = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                tables.push(Self::load_yaml::<TaxTable>(&path)?);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax tables found)", dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the scheme settings.
    pub fn scheme(&self) -> &SchemeSettings {
        self.config.scheme()
    }

    /// Returns the standard monthly hours cap.
    pub fn standard_monthly_cap(&self) -> Decimal {
        self.config.scheme().standard_monthly_cap_hours
    }

    /// Gets the tax table in force on the given date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/uk_paye")?;
    /// let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
    /// let table = loader.get_tax_table(date)?;
    /// println!("Basic rate: {}", table.bands.basic_rate);
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn get_tax_table(&self, date: NaiveDate) -> EngineResult<&TaxTable> {
        self.config
            .tax_table_for(date)
            .ok_or(EngineError::TaxTableNotFound { date })
    }
}
