//! Catalog operations for the Garden.

use tokio::task;

use super::Garden;
use crate::{
    catalog::{bundled_plants, Catalog},
    error::{FurrowError, Result},
    models::{PlantRecord, PlantRule},
    params::{Id, ImportPlants, ListPlants, SetFavorite},
};

impl Garden {
    /// Lists catalog plants ordered by name.
    pub async fn list_plants(&self, params: &ListPlants) -> Result<Vec<PlantRecord>> {
        let db_path = self.db_path.clone();
        let search = params.search.clone();

        task::spawn_blocking(move || {
            let catalog = Catalog::new(&db_path)?;
            catalog.list_plants(search.as_deref())
        })
        .await
        .map_err(FurrowError::join)?
    }

    /// Retrieves a plant by its ID.
    pub async fn get_plant(&self, params: &Id) -> Result<Option<PlantRecord>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let catalog = Catalog::new(&db_path)?;
            catalog.get_plant(id)
        })
        .await
        .map_err(FurrowError::join)?
    }

    /// Imports plant definitions from a JSON file, or the bundled starter
    /// catalog when no path is given. Returns the number of plants written.
    pub async fn import_plants(&self, params: &ImportPlants) -> Result<usize> {
        let db_path = self.db_path.clone();
        let source = params.path.clone();

        task::spawn_blocking(move || {
            let records: Vec<PlantRecord> = match source {
                Some(path) => {
                    let json = std::fs::read_to_string(&path)
                        .map_err(|e| FurrowError::FileSystem { path, source: e })?;
                    serde_json::from_str(&json)?
                }
                None => bundled_plants()?,
            };

            let mut catalog = Catalog::new(&db_path)?;
            catalog.upsert_plants(&records)
        })
        .await
        .map_err(FurrowError::join)?
    }

    /// Adds a plant to or removes it from the garden.
    pub async fn set_favorite(&self, params: &SetFavorite) -> Result<PlantRecord> {
        let db_path = self.db_path.clone();
        let SetFavorite { id, favorite } = *params;

        task::spawn_blocking(move || {
            let catalog = Catalog::new(&db_path)?;
            catalog.set_favorite(id, favorite)
        })
        .await
        .map_err(FurrowError::join)?
    }

    /// Flips a plant's garden membership.
    pub async fn toggle_favorite(&self, params: &Id) -> Result<PlantRecord> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let catalog = Catalog::new(&db_path)?;
            catalog.toggle_favorite(id)
        })
        .await
        .map_err(FurrowError::join)?
    }

    /// Rules of every plant in the garden, ordered by name.
    pub async fn favorite_plants(&self) -> Result<Vec<PlantRule>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let catalog = Catalog::new(&db_path)?;
            catalog.favorite_plants()
        })
        .await
        .map_err(FurrowError::join)?
    }
}
