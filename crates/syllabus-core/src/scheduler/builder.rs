//! Builder for creating and configuring Scheduler instances.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use log::info;

use super::Scheduler;
use crate::{
    error::{Result, ScheduleError},
    loader::{load_catalog, load_date_labels},
    models::Catalog,
};

/// File name of the catalog looked up in the XDG data directories.
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";

/// Builder for creating and configuring Scheduler instances.
#[derive(Debug, Clone, Default)]
pub struct SchedulerBuilder {
    catalog: Option<Catalog>,
    catalog_path: Option<PathBuf>,
    holidays_path: Option<PathBuf>,
}

impl SchedulerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an in-memory catalog instead of loading one.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets the catalog file path.
    ///
    /// If not specified, `syllabus/catalog.json` is looked up in the XDG data
    /// directories (`$XDG_DATA_HOME`, then `$XDG_DATA_DIRS`).
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a JSON file of holidays (date to name) applied to every plan.
    pub fn with_holidays_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.holidays_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the configured inputs and builds the scheduler.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::XdgDirectory` if no catalog was configured and
    /// none exists in the XDG data directories.
    /// Returns `ScheduleError::FileSystem`, `ScheduleError::Parse` or
    /// `ScheduleError::Serialization` if an input file cannot be read.
    pub fn build(self) -> Result<Scheduler> {
        let catalog = match (self.catalog, self.catalog_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => load_catalog(&path)?,
            (None, None) => load_catalog(&Self::default_catalog_path()?)?,
        };

        let holidays = match self.holidays_path {
            Some(path) => load_date_labels(&path)?,
            None => BTreeMap::new(),
        };

        info!(
            "scheduler ready: {} materials, {} holidays",
            catalog.material_count(),
            holidays.len()
        );
        Ok(Scheduler::new(catalog, holidays))
    }

    /// Returns the catalog found in the XDG data directories.
    fn default_catalog_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("syllabus")
            .find_data_file(DEFAULT_CATALOG_FILE)
            .ok_or_else(|| {
                ScheduleError::XdgDirectory(format!(
                    "no syllabus/{DEFAULT_CATALOG_FILE} in the XDG data directories"
                ))
            })
    }
}
