//! Configuration loading and management for the payroll engine.
//!
//! This module loads the payroll scheme settings and the per-tax-year tax
//! tables from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/uk_paye").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllowanceConfig, ContributionRates, PayrollConfig, SchemeSettings, TaxBands, TaxTable,
    month_end,
};
