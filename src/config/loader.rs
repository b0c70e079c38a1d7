//! Rate table loading functionality.
//!
//! This module provides the [`RateTableSet`] type for loading validated
//! rate tables from YAML files and resolving which table is effective on a
//! given date.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{RateTable, RateTableConfig};

impl RateTable {
    /// Loads and validates a single rate table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read,
    /// `ConfigParseError` if it is not valid YAML for a rate table, or any
    /// construction-time validation error from [`RateTable::new`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::RateTable;
    ///
    /// let table = RateTable::from_yaml_file("./config/ng/2025-01-01.yaml")?;
    /// println!("Loaded table: {}", table.metadata().name);
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: RateTableConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        RateTable::from_config(config)
    }
}

/// A set of rate tables for one jurisdiction, ordered by effective date.
///
/// The set resolves the table applicable to a pay period by picking the
/// most recent table whose effective date is on or before the period date.
/// Historical tables stay available so past pay periods remain
/// reproducible.
///
/// # Directory Structure
///
/// The configuration directory holds one YAML file per effective date:
/// ```text
/// config/ng/
/// ├── 2025-01-01.yaml
/// └── 2026-01-01.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::RateTableSet;
/// use chrono::NaiveDate;
///
/// let tables = RateTableSet::load("./config/ng")?;
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let table = tables.table_for(date)?;
/// println!("Using table version {}", table.metadata().version);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RateTableSet {
    jurisdiction: String,
    tables: Vec<RateTable>,
}

impl RateTableSet {
    /// Loads every `*.yaml` rate table in a directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when the directory is missing or contains
    /// no YAML files, any parse or validation error from the individual
    /// tables, or `InvalidConfiguration` when the tables disagree on
    /// jurisdiction.
    pub fn load<P: AsRef<Path>>(dir: P) -> EngineResult<Self> {
        let dir = dir.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

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
                tables.push(RateTable::from_yaml_file(&path)?);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate table files found)", dir_str),
            });
        }

        let set = Self::from_tables(tables)?;
        info!(
            jurisdiction = %set.jurisdiction,
            tables = set.tables.len(),
            "loaded rate tables"
        );
        Ok(set)
    }

    /// Builds a set from already-constructed tables.
    ///
    /// All tables must share one jurisdiction; they are sorted by effective
    /// date, oldest first.
    pub fn from_tables(tables: Vec<RateTable>) -> EngineResult<Self> {
        let jurisdiction = match tables.first() {
            Some(table) => table.jurisdiction().to_string(),
            None => {
                return Err(EngineError::InvalidConfiguration {
                    field: "rate_tables".to_string(),
                    message: "a rate table set must contain at least one table".to_string(),
                });
            }
        };

        if let Some(other) = tables.iter().find(|t| t.jurisdiction() != jurisdiction) {
            return Err(EngineError::InvalidConfiguration {
                field: "rate_tables".to_string(),
                message: format!(
                    "mixed jurisdictions in one set: '{}' and '{}'",
                    jurisdiction,
                    other.jurisdiction()
                ),
            });
        }

        let mut sorted = tables;
        sorted.sort_by_key(|t| t.effective_date());

        Ok(Self {
            jurisdiction,
            tables: sorted,
        })
    }

    /// Returns the jurisdiction code shared by all tables in the set.
    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    /// Returns all tables, oldest effective date first.
    pub fn tables(&self) -> &[RateTable] {
        &self.tables
    }

    /// Returns the table effective on the given date.
    ///
    /// Picks the most recent table whose effective date is on or before
    /// `date`, or `RateTableNotFound` when none covers it.
    pub fn table_for(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.tables
            .iter()
            .rfind(|t| t.effective_date() <= date)
            .ok_or_else(|| EngineError::RateTableNotFound {
                jurisdiction: self.jurisdiction.clone(),
                date,
            })
    }

    /// Returns the table with the most recent effective date.
    pub fn latest(&self) -> &RateTable {
        // from_tables guarantees the set is non-empty and sorted.
        &self.tables[self.tables.len() - 1]
    }
}
