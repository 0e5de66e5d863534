use std::path::PathBuf;

use anyhow::{bail, Context as _};
use log::debug;

use crate::store::{FileStorage, ScheduleStore};

const APP_DIR: &str = "week-sheet";

pub struct Config {
    storage_dir: PathBuf,
}

#[derive(Default)]
pub struct ConfigBuilder {
    storage_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn storage_dir(&mut self, storage_dir: impl Into<PathBuf>) -> &mut Self {
        self.storage_dir = Some(storage_dir.into());
        self
    }

    /// Resolves the storage directory. The directory is only created once
    /// something is saved into it.
    pub fn build(self) -> anyhow::Result<Config> {
        let storage_dir = self.storage_dir.unwrap_or_else(default_storage_dir);

        let storage_dir = if storage_dir.exists() {
            dunce::canonicalize(&storage_dir).with_context(|| {
                format!(
                    "failed to resolve the storage directory \"{}\"",
                    storage_dir.display()
                )
            })?
        } else {
            debug!("{} does not exist yet", storage_dir.display());
            storage_dir
        };

        if storage_dir.is_file() {
            bail!("\"{}\" is not a directory", storage_dir.display());
        }

        debug!("storage directory: {}", storage_dir.display());

        Ok(Config { storage_dir })
    }
}

/// The data directory of the platform, or the working directory if there is
/// none.
fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    #[must_use]
    pub fn storage(&self) -> FileStorage {
        FileStorage::in_dir(&self.storage_dir)
    }

    pub fn open_store(&self) -> ScheduleStore<FileStorage> {
        ScheduleStore::load(self.storage())
    }
}
