//! Plant catalog queries and favorite toggling.

use rusqlite::{params, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, FurrowError, Result},
    models::{PlantRecord, PlantRule},
};

const PLANT_COLUMNS: &str = "id, name, description, start_indoors_days_before_last_frost, transplant_days_after_last_frost, direct_sow_days_after_last_frost, harvest_start_days_after_planting, harvest_end_days_after_planting, notes, is_favorite";

// Re-importing a plant refreshes its rules but never clears a favorite.
const UPSERT_PLANT_SQL: &str = "INSERT INTO plant_definitions (id, name, description, start_indoors_days_before_last_frost, transplant_days_after_last_frost, direct_sow_days_after_last_frost, harvest_start_days_after_planting, harvest_end_days_after_planting, notes, is_favorite) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
    ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        description = excluded.description,
        start_indoors_days_before_last_frost = excluded.start_indoors_days_before_last_frost,
        transplant_days_after_last_frost = excluded.transplant_days_after_last_frost,
        direct_sow_days_after_last_frost = excluded.direct_sow_days_after_last_frost,
        harvest_start_days_after_planting = excluded.harvest_start_days_after_planting,
        harvest_end_days_after_planting = excluded.harvest_end_days_after_planting,
        notes = excluded.notes,
        is_favorite = MAX(plant_definitions.is_favorite, excluded.is_favorite)";
const UPDATE_FAVORITE_SQL: &str = "UPDATE plant_definitions SET is_favorite = ?1 WHERE id = ?2";
const COUNT_PLANTS_SQL: &str = "SELECT COUNT(*) FROM plant_definitions";

/// Ids are stored as SQLite integers, so ids above `i64::MAX` cannot exist.
fn storage_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

fn plant_from_row(row: &Row<'_>) -> rusqlite::Result<PlantRecord> {
    Ok(PlantRecord {
        rule: PlantRule {
            id: row.get(0)?,
            name: row.get(1)?,
            start_indoors_days_before_frost: row.get(3)?,
            transplant_days_after_frost: row.get(4)?,
            direct_sow_days_after_frost: row.get(5)?,
            harvest_start_days_after_planting: row.get(6)?,
            harvest_end_days_after_planting: row.get(7)?,
        },
        description: row.get(2)?,
        notes: row.get(8)?,
        is_favorite: row.get(9)?,
    })
}

impl super::Catalog {
    /// Inserts or refreshes plant records in one transaction.
    ///
    /// Returns the number of records written. A record that is not marked as
    /// favorite keeps the favorite flag already stored for its id.
    pub fn upsert_plants(&mut self, records: &[PlantRecord]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        {
            let mut stmt = tx
                .prepare(UPSERT_PLANT_SQL)
                .db_context("Failed to prepare plant upsert")?;
            for record in records {
                if record.name().trim().is_empty() {
                    return Err(FurrowError::invalid_input("name")
                        .with_reason(format!("plant {} has an empty name", record.id())));
                }
                let rule = &record.rule;
                let id = storage_id(rule.id).ok_or_else(|| {
                    FurrowError::invalid_input("id")
                        .with_reason(format!("{} is larger than {}", rule.id, i64::MAX))
                })?;
                stmt.execute(params![
                    id,
                    rule.name,
                    record.description,
                    rule.start_indoors_days_before_frost,
                    rule.transplant_days_after_frost,
                    rule.direct_sow_days_after_frost,
                    rule.harvest_start_days_after_planting,
                    rule.harvest_end_days_after_planting,
                    record.notes,
                    record.is_favorite,
                ])
                .db_context("Failed to upsert plant")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(records.len())
    }

    /// Lists plants ordered by name, optionally filtered by a case-insensitive
    /// name fragment.
    pub fn list_plants(&self, name_contains: Option<&str>) -> Result<Vec<PlantRecord>> {
        let mut query = format!("SELECT {PLANT_COLUMNS} FROM plant_definitions");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(fragment) = name_contains {
            query.push_str(" WHERE name LIKE ?1");
            params_vec.push(Box::new(format!("%{fragment}%")));
        }
        query.push_str(" ORDER BY name ASC, id ASC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare plant query")?;
        let rows = stmt
            .query_map(rusqlite::params_from_iter(params_vec.iter()), plant_from_row)
            .db_context("Failed to query plants")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plant row")
    }

    /// Retrieves a plant by its ID.
    pub fn get_plant(&self, id: u64) -> Result<Option<PlantRecord>> {
        let Some(id) = storage_id(id) else {
            return Ok(None);
        };
        self.connection
            .query_row(
                &format!("SELECT {PLANT_COLUMNS} FROM plant_definitions WHERE id = ?1"),
                params![id],
                plant_from_row,
            )
            .optional()
            .db_context("Failed to query plant")
    }

    /// Rules of every favorited plant, ordered by name.
    pub fn favorite_plants(&self) -> Result<Vec<PlantRule>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {PLANT_COLUMNS} FROM plant_definitions WHERE is_favorite = 1 ORDER BY name ASC, id ASC"
            ))
            .db_context("Failed to prepare favorites query")?;
        let rows = stmt
            .query_map([], |row| plant_from_row(row).map(PlantRule::from))
            .db_context("Failed to query favorites")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read favorite row")
    }

    /// Sets the favorite flag and returns the updated plant.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::PlantNotFound` if no plant has this ID.
    pub fn set_favorite(&self, id: u64, favorite: bool) -> Result<PlantRecord> {
        let key = storage_id(id).ok_or(FurrowError::PlantNotFound { id })?;
        let updated = self
            .connection
            .execute(UPDATE_FAVORITE_SQL, params![favorite, key])
            .db_context("Failed to update favorite flag")?;
        if updated == 0 {
            return Err(FurrowError::PlantNotFound { id });
        }

        self.get_plant(id)?.ok_or(FurrowError::PlantNotFound { id })
    }

    /// Flips the favorite flag and returns the updated plant.
    pub fn toggle_favorite(&self, id: u64) -> Result<PlantRecord> {
        let plant = self.get_plant(id)?.ok_or(FurrowError::PlantNotFound { id })?;
        self.set_favorite(id, !plant.is_favorite)
    }

    /// Number of plants in the catalog.
    pub fn plant_count(&self) -> Result<usize> {
        self.connection
            .query_row(COUNT_PLANTS_SQL, [], |row| row.get::<_, usize>(0))
            .db_context("Failed to count plants")
    }
}
