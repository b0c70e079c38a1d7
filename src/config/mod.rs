//! Rate table configuration for the payroll breakdown engine.
//!
//! This module provides the validated [`RateTable`] value object and the
//! YAML loading machinery around it, including effective-date resolution
//! across multiple table versions.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::RateTableSet;
//!
//! let tables = RateTableSet::load("./config/ng").unwrap();
//! println!("Loaded {} table(s) for {}", tables.tables().len(), tables.jurisdiction());
//! ```

mod loader;
mod types;

pub use loader::RateTableSet;
pub use types::{
    FixedFee, RateEntry, RateTable, RateTableConfig, RateTableMetadata, ServiceFeeSchedule,
    StatutoryRates, TaxBand, TaxSchedule,
};
