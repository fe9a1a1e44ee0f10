//! Builder for creating and configuring Garden instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Garden;
use crate::{
    catalog::Catalog,
    config::LastFrost,
    error::{FurrowError, Result},
};

/// Builder for creating and configuring Garden instances.
#[derive(Debug, Clone)]
pub struct GardenBuilder {
    database_path: Option<PathBuf>,
    last_frost: LastFrost,
}

impl GardenBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            last_frost: LastFrost::default(),
        }
    }

    /// Sets a custom catalog database path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/furrow/furrow.db` or `~/.local/share/furrow/furrow.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the regional last frost date. Defaults to May 15.
    pub fn with_last_frost(mut self, last_frost: LastFrost) -> Self {
        self.last_frost = last_frost;
        self
    }

    /// Builds the configured garden instance.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::FileSystem` if the database directory cannot be
    /// created.
    /// Returns `FurrowError::Database` if catalog initialization fails
    pub async fn build(self) -> Result<Garden> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FurrowError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _catalog = Catalog::new(&db_path_clone)?;
            Ok::<(), FurrowError>(())
        })
        .await
        .map_err(FurrowError::join)??;

        Ok(Garden::new(db_path, self.last_frost))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("furrow")
            .place_data_file("furrow.db")
            .map_err(|e| FurrowError::XdgDirectory(e.to_string()))
    }
}

impl Default for GardenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
