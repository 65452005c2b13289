use core::load_catalog;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_rows_and_normalizes_missing_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("titles.csv");
    fs::write(
        &path,
        "show_id,type,title,director,cast,listed_in\n\
         s1,Movie,Alpha,Jane Doe,Someone,Comedies\n\
         s2,Movie,Beta,,,\n",
    )
    .unwrap();

    let records = load_catalog(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Alpha");
    assert_eq!(records[0].director.as_deref(), Some("Jane Doe"));
    assert_eq!(records[0].genres, "Comedies");
    // Empty cells normalize at the load boundary: director None, genres "".
    assert_eq!(records[1].director, None);
    assert_eq!(records[1].genres, "");
}

#[test]
fn missing_required_column_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("titles.csv");
    fs::write(&path, "title,director\nAlpha,Jane Doe\n").unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(err.to_string().contains("listed_in"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_catalog(dir.path().join("nope.csv")).is_err());
}
