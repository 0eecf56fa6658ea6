//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the yearly
//! legal tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{InssTable, IrrfTable, LaborTables, PremiumRates, UnemploymentTable, YearMetadata};

/// Loads and provides access to the legal tables for one year.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/br2024/
/// ├── year.yaml          # Year metadata and minimum wage
/// ├── inss.yaml          # INSS contribution brackets
/// ├── irrf.yaml          # IRRF withholding brackets
/// ├── premiums.yaml      # Fixed premium percentages
/// └── unemployment.yaml  # Unemployment insurance tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use clt_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/br2024").unwrap();
/// let tables = loader.tables();
/// println!("Minimum wage: {}", tables.metadata.minimum_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: LaborTables,
}

impl ConfigLoader {
    /// Loads the tables from the specified directory.
    ///
    /// Returns an error if any required file is missing, contains
    /// invalid YAML, or describes a structurally invalid table
    /// (gaps, overlaps, or wrong bounds).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<YearMetadata>(&path.join("year.yaml"))?;
        let inss = Self::load_yaml::<InssTable>(&path.join("inss.yaml"))?;
        let irrf = Self::load_yaml::<IrrfTable>(&path.join("irrf.yaml"))?;
        let premiums = Self::load_yaml::<PremiumRates>(&path.join("premiums.yaml"))?;
        let unemployment = Self::load_yaml::<UnemploymentTable>(&path.join("unemployment.yaml"))?;

        let tables = LaborTables {
            metadata,
            inss,
            irrf,
            premiums,
            unemployment,
        };
        tables.validate()?;

        Ok(Self { tables })
    }

    /// Loads and parses a YAML file.
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

    /// Returns the loaded tables.
    pub fn tables(&self) -> &LaborTables {
        &self.tables
    }
}
