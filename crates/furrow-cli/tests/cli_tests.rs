use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn furrow_cmd() -> Command {
    let mut cmd = Command::cargo_bin("furrow").expect("Failed to find furrow binary");
    cmd.arg("--no-color");
    cmd
}

/// Creates a database holding the bundled starter catalog
fn imported_db(temp_dir: &TempDir) -> String {
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap().to_string();

    furrow_cmd()
        .args(["--database-file", &db_arg, "plant", "import"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Imported"))
        .stdout(predicate::str::contains("the starter catalog"));

    db_arg
}

fn add_to_garden(db_arg: &str, id: &str) {
    furrow_cmd()
        .args(["--database-file", db_arg, "garden", "add", id])
        .assert()
        .success();
}

#[test]
fn test_cli_list_empty_catalog() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "plant", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plant catalog"))
        .stdout(predicate::str::contains("No plants found."));
}

#[test]
fn test_cli_import_and_search() {
    let temp_dir = create_cli_test_environment();
    let db_arg = imported_db(&temp_dir);

    furrow_cmd()
        .args(["--database-file", &db_arg, "plant", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("☆ 1. Tomato"))
        .stdout(predicate::str::contains("☆ 3. Lettuce"));

    furrow_cmd()
        .args(["--database-file", &db_arg, "plant", "ls", "--search", "LETT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lettuce"))
        .stdout(predicate::str::contains("Tomato").not());
}

#[test]
fn test_cli_import_from_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let catalog = temp_dir.path().join("plants.json");
    std::fs::write(
        &catalog,
        r#"[{"id": 40, "name": "Garlic", "direct_sow_days_after_frost": 150}]"#,
    )
    .unwrap();

    furrow_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plant",
            "import",
            catalog.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Imported 1 plants"));
}

#[test]
fn test_cli_import_missing_file_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plant",
            "import",
            "does-not-exist.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to import plants"));
}

#[test]
fn test_cli_show_plant() {
    let temp_dir = create_cli_test_environment();
    let db_arg = imported_db(&temp_dir);

    furrow_cmd()
        .args(["--database-file", &db_arg, "plant", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Tomato"))
        .stdout(predicate::str::contains("- Start indoors: 42 days before last frost"))
        .stdout(predicate::str::contains("- Transplant: 14 days after last frost"))
        .stdout(predicate::str::contains("## Notes"));
}

#[test]
fn test_cli_show_unknown_plant_fails() {
    let temp_dir = create_cli_test_environment();
    let db_arg = imported_db(&temp_dir);

    furrow_cmd()
        .args(["--database-file", &db_arg, "plant", "show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plant with ID 999 not found"));
}

#[test]
fn test_cli_garden_add_remove_toggle() {
    let temp_dir = create_cli_test_environment();
    let db_arg = imported_db(&temp_dir);

    furrow_cmd()
        .args(["--database-file", &db_arg, "--year", "2024", "garden", "add", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Added Tomato to your garden"))
        .stdout(predicate::str::contains("4 tasks on 4 days"));

    furrow_cmd()
        .args(["--database-file", &db_arg, "garden", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# My garden"))
        .stdout(predicate::str::contains("★ 1. Tomato"))
        .stdout(predicate::str::contains("Lettuce").not());

    furrow_cmd()
        .args(["--database-file", &db_arg, "garden", "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Removed Tomato from your garden"))
        .stdout(predicate::str::contains("0 tasks on 0 days"));

    furrow_cmd()
        .args(["--database-file", &db_arg, "garden", "remove", "1"])
        .assert()
        .success();

    furrow_cmd()
        .args(["--database-file", &db_arg, "garden", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plants found."));
}

#[test]
fn test_cli_garden_add_unknown_plant_fails() {
    let temp_dir = create_cli_test_environment();
    let db_arg = imported_db(&temp_dir);

    furrow_cmd()
        .args(["--database-file", &db_arg, "garden", "add", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to update garden"));
}

#[test]
fn test_cli_default_command_shows_empty_agenda() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd()
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Add plants to your garden to see calendar events.",
        ));
}

#[test]
fn test_cli_calendar_agenda() {
    let temp_dir = create_cli_test_environment();
    let db_arg = imported_db(&temp_dir);
    add_to_garden(&db_arg, "1");
    add_to_garden(&db_arg, "3");

    furrow_cmd()
        .args(["--database-file", &db_arg, "--year", "2024", "calendar", "agenda"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# Planting calendar 2024 (last frost 2024-05-15)",
        ))
        .stdout(predicate::str::contains("## 2024-04-03 (Wednesday)"))
        .stdout(predicate::str::contains("- Tomato: Start seeds indoors"))
        .stdout(predicate::str::contains("- Lettuce: Direct sow seeds"))
        .stdout(predicate::str::contains("- Tomato: End harvest window"));
}

#[test]
fn test_cli_calendar_day() {
    let temp_dir = create_cli_test_environment();
    let db_arg = imported_db(&temp_dir);
    add_to_garden(&db_arg, "1");

    furrow_cmd()
        .args(["--database-file", &db_arg, "calendar", "day", "2024-05-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 2024-05-29 (Wednesday)"))
        .stdout(predicate::str::contains("- Tomato: Transplant seedlings"));

    furrow_cmd()
        .args(["--database-file", &db_arg, "calendar", "day", "2024-05-30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No scheduled tasks for 2024-05-30."));
}

#[test]
fn test_cli_calendar_day_rejects_bad_date() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "calendar",
            "day",
            "2024-13-01",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_calendar_month() {
    let temp_dir = create_cli_test_environment();
    let db_arg = imported_db(&temp_dir);
    add_to_garden(&db_arg, "1");
    add_to_garden(&db_arg, "3");

    furrow_cmd()
        .args(["--database-file", &db_arg, "--year", "2024", "calendar", "month", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## April 2024"))
        .stdout(predicate::str::contains("  1   2   3*  4   5   6   7"))
        .stdout(predicate::str::contains("- **17**: Lettuce: Direct sow seeds"));

    // Defaults to the month of the last frost
    furrow_cmd()
        .args(["--database-file", &db_arg, "--year", "2024", "calendar", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## May 2024"))
        .stdout(predicate::str::contains("- **29**: Tomato: Transplant seedlings"));
}

#[test]
fn test_cli_calendar_month_out_of_range() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "calendar",
            "month",
            "13",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_custom_last_frost() {
    let temp_dir = create_cli_test_environment();
    let db_arg = imported_db(&temp_dir);
    add_to_garden(&db_arg, "3");

    furrow_cmd()
        .args([
            "--database-file",
            &db_arg,
            "--last-frost",
            "04-20",
            "--year",
            "2024",
            "calendar",
            "day",
            "2024-03-23",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Lettuce: Direct sow seeds"));
}

#[test]
fn test_cli_rejects_invalid_last_frost() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "--last-frost",
            "02-30",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("last_frost"));
}

#[test]
fn test_cli_creates_database_directory() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("nested").join("garden.db");

    furrow_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "garden", "list"])
        .assert()
        .success();
    assert!(Path::new(&db_path).exists());
}
