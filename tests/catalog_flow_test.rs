use std::fs;

use shopkit::core::catalog;
use shopkit::domain::model::Describe;
use shopkit::utils::validation::Validate;
use shopkit::FileConfig;
use tempfile::TempDir;

#[test]
fn test_featured_flow_with_file_backed_catalog_and_config() {
    let temp_dir = TempDir::new().unwrap();

    let books_path = temp_dir.path().join("books.json");
    fs::write(
        &books_path,
        serde_json::json!([
            {"title": "Slow River", "author": "N. Griffith", "rating": 4.6},
            {"title": "Field Notes", "author": "R. Macfarlane", "rating": 3.2},
            {"title": "Ninefox Gambit", "author": "Y. Lee", "rating": 4.1}
        ])
        .to_string(),
    )
    .unwrap();

    let config_path = temp_dir.path().join("shopkit.toml");
    fs::write(
        &config_path,
        "[catalog]\nmin_rating = 4.0\n\n[compute]\ndelay_ms = 10\n",
    )
    .unwrap();

    let config = FileConfig::load_from_file(&config_path).unwrap();
    config.validate().unwrap();

    let books = catalog::read_books(&books_path).unwrap();
    let picks = catalog::featured(&books, config.min_rating());

    assert_eq!(picks.len(), 2);
    assert_eq!(picks[0].title, "Slow River");
    assert_eq!(picks[1].title, "Ninefox Gambit");
}

#[test]
fn test_merge_and_priciest_across_catalog_files() {
    let temp_dir = TempDir::new().unwrap();

    let front_path = temp_dir.path().join("front.json");
    fs::write(
        &front_path,
        serde_json::json!([
            {"name": "Mug", "price": 7.5},
            {"name": "Lamp", "price": 42.0}
        ])
        .to_string(),
    )
    .unwrap();

    let back_path = temp_dir.path().join("back.json");
    fs::write(
        &back_path,
        serde_json::json!([
            {"name": "Desk", "price": 42.0},
            {"name": "Pen", "price": 1.2}
        ])
        .to_string(),
    )
    .unwrap();

    let front = catalog::read_products(&front_path).unwrap();
    let back = catalog::read_products(&back_path).unwrap();
    let merged = catalog::merge(vec![front, back]);

    // Order and count survive the merge.
    assert_eq!(merged.len(), 4);
    let names: Vec<&str> = merged.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Mug", "Lamp", "Desk", "Pen"]);

    // Lamp and Desk tie at 42.0; the first encountered wins.
    let winner = catalog::priciest(&merged).unwrap();
    assert_eq!(winner.name, "Lamp");
}

#[test]
fn test_staff_file_describes_every_record() {
    let temp_dir = TempDir::new().unwrap();

    let staff_path = temp_dir.path().join("staff.json");
    fs::write(
        &staff_path,
        serde_json::json!([
            {"kind": "Employee", "name": "Mona", "role": "cashier"},
            {"kind": "Manager", "name": "Iris", "role": "buyer", "department": "paperbacks"}
        ])
        .to_string(),
    )
    .unwrap();

    let staff = catalog::read_staff(&staff_path).unwrap();
    let lines: Vec<String> = staff.iter().map(|record| record.describe()).collect();

    assert_eq!(
        lines,
        vec![
            "Mona works as cashier".to_string(),
            "Iris works as buyer, heading paperbacks".to_string(),
        ]
    );
}

#[test]
fn test_missing_catalog_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nowhere.json");

    let err = catalog::read_books(&missing).unwrap_err();
    assert!(matches!(err, shopkit::ShopkitError::IoError(_)));
}

#[test]
fn test_malformed_catalog_file_is_a_serialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let bad_path = temp_dir.path().join("bad.json");
    fs::write(&bad_path, "{not json").unwrap();

    let err = catalog::read_books(&bad_path).unwrap_err();
    assert!(matches!(err, shopkit::ShopkitError::SerializationError(_)));
}
