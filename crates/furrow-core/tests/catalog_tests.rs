use furrow_core::{
    catalog::bundled_plants, Catalog, FurrowError, PlantRecord, PlantRule,
};
use tempfile::TempDir;

fn record(id: u64, name: &str) -> PlantRecord {
    PlantRecord::from(PlantRule::new(id, name))
}

fn tomato() -> PlantRecord {
    PlantRecord {
        rule: PlantRule {
            start_indoors_days_before_frost: Some(42),
            transplant_days_after_frost: Some(14),
            harvest_start_days_after_planting: Some(60),
            harvest_end_days_after_planting: Some(120),
            ..PlantRule::new(1, "Tomato")
        },
        description: Some("Warm-season crop".to_string()),
        notes: Some("Stake early".to_string()),
        is_favorite: false,
    }
}

#[test]
fn test_catalog_creates_schema_on_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("catalog.db");

    let catalog = Catalog::new(&db_path).expect("Failed to open catalog");
    assert_eq!(catalog.plant_count().unwrap(), 0);
    assert!(db_path.exists());

    // Reopening an existing catalog keeps its rows
    let mut catalog = Catalog::new(&db_path).expect("Failed to reopen catalog");
    catalog.upsert_plants(&[tomato()]).unwrap();
    drop(catalog);
    let catalog = Catalog::new(&db_path).expect("Failed to reopen catalog");
    assert_eq!(catalog.plant_count().unwrap(), 1);
}

#[test]
fn test_upsert_and_get_round_trip() {
    let mut catalog = Catalog::in_memory().unwrap();
    assert_eq!(catalog.upsert_plants(&[tomato()]).unwrap(), 1);

    let stored = catalog.get_plant(1).unwrap().expect("plant should exist");
    assert_eq!(stored, tomato());
    assert!(catalog.get_plant(2).unwrap().is_none());
}

#[test]
fn test_list_plants_sorted_and_filtered() {
    let mut catalog = Catalog::in_memory().unwrap();
    catalog
        .upsert_plants(&[record(3, "Zucchini"), record(1, "Basil"), record(2, "Sweet Basil")])
        .unwrap();

    let names: Vec<String> = catalog
        .list_plants(None)
        .unwrap()
        .into_iter()
        .map(|p| p.rule.name)
        .collect();
    assert_eq!(names, vec!["Basil", "Sweet Basil", "Zucchini"]);

    let basils = catalog.list_plants(Some("basil")).unwrap();
    assert_eq!(basils.len(), 2);
    assert!(catalog.list_plants(Some("tomato")).unwrap().is_empty());
}

#[test]
fn test_favorites_follow_toggles() {
    let mut catalog = Catalog::in_memory().unwrap();
    catalog
        .upsert_plants(&[tomato(), record(2, "Carrot"), record(3, "Bean")])
        .unwrap();
    assert!(catalog.favorite_plants().unwrap().is_empty());

    let carrot = catalog.set_favorite(2, true).unwrap();
    assert!(carrot.is_favorite);
    catalog.toggle_favorite(1).unwrap();

    let favorites: Vec<String> = catalog
        .favorite_plants()
        .unwrap()
        .into_iter()
        .map(|rule| rule.name)
        .collect();
    assert_eq!(favorites, vec!["Carrot", "Tomato"]);

    let tomato = catalog.toggle_favorite(1).unwrap();
    assert!(!tomato.is_favorite);
    assert_eq!(catalog.favorite_plants().unwrap().len(), 1);
}

#[test]
fn test_favorite_rules_keep_offsets() {
    let mut catalog = Catalog::in_memory().unwrap();
    catalog.upsert_plants(&[tomato()]).unwrap();
    catalog.set_favorite(1, true).unwrap();

    let favorites = catalog.favorite_plants().unwrap();
    assert_eq!(favorites, vec![tomato().rule]);
}

#[test]
fn test_set_favorite_unknown_plant() {
    let catalog = Catalog::in_memory().unwrap();
    let err = catalog.set_favorite(99, true).unwrap_err();
    assert!(matches!(err, FurrowError::PlantNotFound { id: 99 }));

    let err = catalog.toggle_favorite(99).unwrap_err();
    assert!(matches!(err, FurrowError::PlantNotFound { id: 99 }));
}

#[test]
fn test_reimport_preserves_favorite_flag() {
    let mut catalog = Catalog::in_memory().unwrap();
    catalog.upsert_plants(&[tomato()]).unwrap();
    catalog.set_favorite(1, true).unwrap();

    let mut updated = tomato();
    updated.rule.transplant_days_after_frost = Some(21);
    catalog.upsert_plants(&[updated]).unwrap();

    let stored = catalog.get_plant(1).unwrap().unwrap();
    assert!(stored.is_favorite);
    assert_eq!(stored.rule.transplant_days_after_frost, Some(21));
}

#[test]
fn test_upsert_rejects_empty_name_atomically() {
    let mut catalog = Catalog::in_memory().unwrap();
    let err = catalog
        .upsert_plants(&[record(1, "Kale"), record(2, "  ")])
        .unwrap_err();
    assert!(matches!(err, FurrowError::InvalidInput { .. }));
    assert_eq!(catalog.plant_count().unwrap(), 0);
}

#[test]
fn test_bundled_catalog_imports() {
    let plants = bundled_plants().unwrap();
    let mut catalog = Catalog::in_memory().unwrap();
    assert_eq!(catalog.upsert_plants(&plants).unwrap(), plants.len());
    assert_eq!(catalog.plant_count().unwrap(), plants.len());
}

#[test]
fn test_ids_beyond_storage_range() {
    let mut catalog = Catalog::in_memory().unwrap();
    let err = catalog
        .upsert_plants(&[record(u64::MAX, "Overflow")])
        .unwrap_err();
    assert!(matches!(err, FurrowError::InvalidInput { .. }));
    assert_eq!(catalog.plant_count().unwrap(), 0);

    let largest = i64::MAX as u64;
    catalog.upsert_plants(&[record(largest, "Largest")]).unwrap();
    assert_eq!(catalog.get_plant(largest).unwrap().unwrap().id(), largest);

    assert!(catalog.get_plant(largest + 1).unwrap().is_none());
    let err = catalog.set_favorite(largest + 1, true).unwrap_err();
    assert!(matches!(err, FurrowError::PlantNotFound { .. }));
}
