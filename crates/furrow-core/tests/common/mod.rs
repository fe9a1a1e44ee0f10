use furrow_core::{GardenBuilder, LastFrost};
use tempfile::TempDir;

/// Helper function to create a test garden with the default last frost date
pub async fn create_test_garden() -> (TempDir, furrow_core::Garden) {
    create_test_garden_with_frost(LastFrost::default()).await
}

/// Helper function to create a test garden with a custom last frost date
pub async fn create_test_garden_with_frost(
    last_frost: LastFrost,
) -> (TempDir, furrow_core::Garden) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let garden = GardenBuilder::new()
        .with_database_path(Some(&db_path))
        .with_last_frost(last_frost)
        .build()
        .await
        .expect("Failed to create garden");
    (temp_dir, garden)
}
