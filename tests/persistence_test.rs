mod common;

use chrono::{TimeZone, Utc};
use common::draft;
use recipebox::db::{FileStore, KeyValueStore, MemoryStore, SqliteStore};
use recipebox::{filter_recipes, RecipeFilter, RecipeStore, ServingsBucket, TimeBucket};
use std::sync::Arc;
use tempfile::tempdir;

/// Save a few recipes, reload from the same backend, compare
async fn assert_round_trip(backend: Arc<dyn KeyValueStore>) {
    let mut store = RecipeStore::load(backend.clone(), "recipes").await.unwrap();

    let mut imported = draft("Imported", 5, 5, 1);
    imported.id = Some("1700000000000".to_string());
    imported.saved_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
    store.append(imported).await.unwrap();

    let mut sparse = draft("Sparse", 0, 0, 3);
    sparse.content.description = None;
    sparse.content.ingredients.clear();
    store.append(sparse).await.unwrap();

    store.append(draft("Crème brûlée", 20, 40, 6)).await.unwrap();
    let saved = store.all().to_vec();

    let reloaded = RecipeStore::load(backend, "recipes").await.unwrap();
    assert_eq!(reloaded.all(), saved.as_slice());
    assert_eq!(reloaded.all()[0].id, "1700000000000");
    assert_eq!(reloaded.all()[1].content.description, None);
}

#[tokio::test]
async fn test_memory_round_trip() {
    assert_round_trip(Arc::new(MemoryStore::new())).await;
}

#[tokio::test]
async fn test_file_round_trip() {
    let dir = tempdir().unwrap();
    let backend = FileStore::new(dir.path()).await.unwrap();
    assert_round_trip(Arc::new(backend)).await;
}

#[tokio::test]
async fn test_sqlite_round_trip() {
    let dir = tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("recipebox.db").display());
    let backend = SqliteStore::connect(&url).await.unwrap();
    assert_round_trip(Arc::new(backend)).await;
}

#[tokio::test]
async fn test_reads_legacy_browser_data() {
    let backend = Arc::new(MemoryStore::new());
    backend
        .set(
            "recipes",
            r#"[{
                "title": "Creamy Garlic Pasta",
                "description": "A quick and delicious pasta dish",
                "image": "https://images.unsplash.com/photo.jpg",
                "cookTime": 25,
                "prepTime": 10,
                "servings": 4,
                "difficulty": "Easy",
                "cuisine": "Italian",
                "ingredients": ["400g spaghetti", "4 cloves garlic, minced"],
                "instructions": ["Cook spaghetti"],
                "sourceUrl": "https://www.youtube.com/watch?v=x",
                "platform": "YouTube",
                "extractedAt": "2024-05-01T10:00:00.000Z",
                "id": "1714557600000",
                "savedAt": "2024-05-01T10:00:02.000Z"
            }]"#,
        )
        .await
        .unwrap();

    let store = RecipeStore::load(backend, "recipes").await.unwrap();
    assert_eq!(store.len(), 1);
    let recipe = store.get("1714557600000").unwrap();
    assert_eq!(recipe.total_time(), 35);
    assert_eq!(recipe.content.cuisine.as_deref(), Some("Italian"));
}

#[tokio::test]
async fn test_malformed_file_loads_empty() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("recipes.json"), "[{\"title\": ").unwrap();

    let backend = FileStore::new(dir.path()).await.unwrap();
    let store = RecipeStore::load(Arc::new(backend), "recipes").await.unwrap();
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_save_search_delete_scenario() {
    let backend = Arc::new(MemoryStore::new());
    let mut store = RecipeStore::load(backend.clone(), "recipes").await.unwrap();
    store.append(draft("Garden Salad", 15, 0, 2)).await.unwrap();

    let id = store
        .append(draft("Test Pasta", 10, 15, 2))
        .await
        .unwrap()
        .id
        .clone();
    let before = store.len();

    let hits = filter_recipes(store.all(), &RecipeFilter::new("pasta"));
    assert!(hits.iter().any(|r| r.id == id));

    let small = RecipeFilter::default().with_servings(ServingsBucket::OneToTwo);
    assert!(filter_recipes(store.all(), &small).iter().any(|r| r.id == id));

    let quick = RecipeFilter::default().with_time(TimeBucket::Quick);
    assert!(filter_recipes(store.all(), &quick).iter().any(|r| r.id == id));

    assert!(store.remove(&id).await.unwrap());
    assert_eq!(store.len(), before - 1);

    let filters = [
        RecipeFilter::default(),
        RecipeFilter::new("pasta"),
        small,
        quick,
    ];
    for filter in &filters {
        assert!(!filter_recipes(store.all(), filter).iter().any(|r| r.id == id));
    }

    // The deletion was persisted
    let reloaded = RecipeStore::load(backend, "recipes").await.unwrap();
    assert!(reloaded.get(&id).is_none());
    assert_eq!(reloaded.len(), before - 1);
}
