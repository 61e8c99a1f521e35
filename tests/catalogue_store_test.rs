use article_catalogue::utils::error::StorageErrorKind;
use article_catalogue::{
    Article, ArticleStore, CatalogueError, CatalogueService, LocalStorage, SnapshotArticleStore,
};
use chrono::Datelike;
use rust_decimal_macros::dec;
use std::fs;
use tempfile::TempDir;

fn this_year() -> i32 {
    chrono::Local::now().year()
}

fn sample_articles() -> Vec<Article> {
    vec![
        Article::book(1, "Moby-Dick", "Harper", 1851, dec!(14.90), 635).unwrap(),
        Article::dvd(2, "Solaris", "Mosfilm", 1972, dec!(12.00), 167, 12).unwrap(),
        Article::book(3, "Infinite Jest", "Little, Brown", 1996, dec!(25.00), 1079).unwrap(),
    ]
}

#[test]
fn test_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("articles.json");

    let mut store = SnapshotArticleStore::load(LocalStorage::new(&path)).unwrap();
    for article in sample_articles() {
        store.add(article).unwrap();
    }
    assert!(path.exists());

    let restored = SnapshotArticleStore::load(LocalStorage::new(&path)).unwrap();
    assert_eq!(restored.list(), sample_articles().as_slice());
}

#[test]
fn test_missing_file_is_an_empty_catalogue() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("never-written.json");

    let store = SnapshotArticleStore::load(LocalStorage::new(&path)).unwrap();

    assert!(store.list().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_snapshot_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("articles.json");

    let mut store = SnapshotArticleStore::load(LocalStorage::new(&path)).unwrap();
    store
        .add(Article::dvd(8, "Playtime", "Specta", 1967, dec!(19.5), 124, 0).unwrap())
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(json["version"], 1);
    let article = &json["articles"][0];
    assert_eq!(article["type"], "dvd");
    assert_eq!(article["id"], 8);
    assert_eq!(article["base_price"], "19.50");
    assert_eq!(article["length"], 124);
    assert_eq!(article["min_age"], 0);
}

#[test]
fn test_rewrites_whole_snapshot_on_delete() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("articles.json");

    let mut store = SnapshotArticleStore::load(LocalStorage::new(&path)).unwrap();
    for article in sample_articles() {
        store.add(article).unwrap();
    }
    store.remove(2).unwrap();

    let restored = SnapshotArticleStore::load(LocalStorage::new(&path)).unwrap();
    let ids: Vec<u32> = restored.list().iter().map(Article::id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_duplicate_and_missing_ids_leave_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("articles.json");

    let mut store = SnapshotArticleStore::load(LocalStorage::new(&path)).unwrap();
    store
        .add(Article::book(5, "Ulysses", "Shakespeare and Company", 1922, dec!(30.00), 730).unwrap())
        .unwrap();
    let before = fs::read(&path).unwrap();

    let duplicate = Article::dvd(5, "Vertigo", "Paramount", 1958, dec!(8.00), 128, 12).unwrap();
    assert!(matches!(
        store.add(duplicate),
        Err(CatalogueError::DuplicateId { id: 5 })
    ));
    assert!(matches!(store.remove(6), Err(CatalogueError::NotFound { id: 6 })));

    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(store.list().len(), 1);
}

#[test]
fn test_corrupt_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("articles.json");
    fs::write(&path, b"\xac\xed\x00\x05 not a catalogue").unwrap();

    let err = SnapshotArticleStore::load(LocalStorage::new(&path)).unwrap_err();

    assert!(matches!(
        err,
        CatalogueError::Storage {
            kind: StorageErrorKind::Deserialization,
            ..
        }
    ));
}

#[test]
fn test_empty_file_is_not_an_empty_catalogue() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("articles.json");
    fs::write(&path, b"").unwrap();

    assert!(SnapshotArticleStore::load(LocalStorage::new(&path)).is_err());
}

#[test]
fn test_statistics_over_file_backed_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("articles.json");
    let year = this_year();

    let mut service =
        CatalogueService::new(SnapshotArticleStore::load(LocalStorage::new(&path)).unwrap());
    // released this year: no age discount, so price == base price
    service
        .add_article(Article::book(1, "A", "P", year, dec!(10.00), 100).unwrap())
        .unwrap();
    service
        .add_article(Article::book(2, "B", "P", year, dec!(20.00), 100).unwrap())
        .unwrap();

    assert_eq!(service.price_mean().unwrap(), dec!(15.00));
    assert_eq!(service.oldest_article_ids().unwrap(), vec![1, 2]);
}
