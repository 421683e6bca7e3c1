use reviewgram::error::ReviewGramError;
use reviewgram::source::{DirectorySource, InMemorySource, ReviewSource};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_page(root: &Path, content_id: &str, name: &str, body: &str) {
    let dir = root.join(content_id);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn test_directory_source_reads_pages_in_order_across_formats() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "B00X", "page-1.txt", "First review.\n\nSecond review.\n");
    write_page(dir.path(), "B00X", "page-2.json", r#"["Third review", {"text": "Fourth review"}]"#);
    write_page(dir.path(), "B00X", "page-3.csv", "rating,text\n5,Fifth review\n");

    let source = DirectorySource::new(dir.path());
    let reviews = source.fetch_reviews("B00X", 3).unwrap();
    assert_eq!(
        reviews,
        vec![
            "First review.",
            "Second review.",
            "Third review",
            "Fourth review",
            "Fifth review"
        ]
    );
}

#[test]
fn test_directory_source_stops_at_first_missing_page() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "B00X", "page-1.txt", "one");
    write_page(dir.path(), "B00X", "page-3.txt", "three");

    let source = DirectorySource::new(dir.path());
    assert_eq!(source.fetch_reviews("B00X", 10).unwrap(), vec!["one"]);
}

#[test]
fn test_directory_source_zero_pages_is_empty() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "B00X", "page-1.txt", "one");
    let source = DirectorySource::new(dir.path());
    assert!(source.fetch_reviews("B00X", 0).unwrap().is_empty());
}

#[test]
fn test_directory_source_unknown_content_id() {
    let dir = TempDir::new().unwrap();
    let source = DirectorySource::new(dir.path());
    let err = source.fetch_reviews("NOPE", 1).unwrap_err();
    assert!(matches!(err, ReviewGramError::Source(_)));
}

#[test]
fn test_directory_source_rejects_path_like_ids() {
    let dir = TempDir::new().unwrap();
    let source = DirectorySource::new(dir.path());
    for id in ["../etc", "a/b", ""] {
        let err = source.fetch_page(id, 1).unwrap_err();
        assert!(matches!(err, ReviewGramError::Source(_)), "accepted '{}'", id);
    }
}

#[test]
fn test_directory_source_surfaces_malformed_json() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "B00X", "page-1.json", "{not json");
    let source = DirectorySource::new(dir.path());
    let err = source.fetch_reviews("B00X", 1).unwrap_err();
    assert!(matches!(err, ReviewGramError::Json(_)));
}

#[test]
fn test_in_memory_source_pages_are_one_based() {
    let source = InMemorySource::new().with_pages("P", vec![vec!["a", "b"], vec!["c"]]);
    assert_eq!(source.fetch_page("P", 0).unwrap(), None);
    assert_eq!(source.fetch_page("P", 2).unwrap(), Some(vec!["c".to_string()]));
    assert_eq!(source.fetch_page("P", 3).unwrap(), None);
    assert_eq!(source.fetch_reviews("P", 5).unwrap(), vec!["a", "b", "c"]);
}
