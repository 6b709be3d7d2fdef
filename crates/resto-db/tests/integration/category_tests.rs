use resto_core::models::{Category, NewRestaurant};
use resto_core::traits::{CategoryStore, RestaurantStore};

use crate::integration::common::setup_test_db;

#[tokio::test]
async fn insert_then_get_returns_generated_id() {
    let (db, _container) = setup_test_db().await;
    let repo = db.category_repo();

    let created = repo.insert("Italian").await.unwrap();
    assert!(created.id > 0);

    let fetched = repo.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_is_ordered_by_id() {
    let (db, _container) = setup_test_db().await;
    let repo = db.category_repo();

    assert!(repo.list().await.unwrap().is_empty());

    let a = repo.insert("Sushi").await.unwrap();
    let b = repo.insert("Burgers").await.unwrap();

    let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[tokio::test]
async fn update_reports_rows_touched() {
    let (db, _container) = setup_test_db().await;
    let repo = db.category_repo();
    let created = repo.insert("Italian").await.unwrap();

    let touched = repo
        .update(&Category {
            id: created.id,
            name: "Trattoria".into(),
        })
        .await
        .unwrap();
    assert_eq!(touched, 1);
    assert_eq!(repo.get(created.id).await.unwrap().unwrap().name, "Trattoria");

    let missing = repo
        .update(&Category {
            id: created.id + 1000,
            name: "Ghost".into(),
        })
        .await
        .unwrap();
    assert_eq!(missing, 0);
}

#[tokio::test]
async fn exists_and_find_by_name() {
    let (db, _container) = setup_test_db().await;
    let repo = db.category_repo();
    let created = repo.insert("Crêperie").await.unwrap();

    assert!(repo.exists(created.id).await.unwrap());
    assert!(!repo.exists(created.id + 1).await.unwrap());
    assert_eq!(
        repo.find_by_name("Crêperie").await.unwrap().map(|c| c.id),
        Some(created.id)
    );
    assert!(repo.find_by_name("crêperie").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_cascades_to_restaurants() {
    let (db, _container) = setup_test_db().await;
    let categories = db.category_repo();
    let restaurants = db.restaurant_repo();

    let doomed = categories.insert("Fast food").await.unwrap();
    let kept = categories.insert("Fine dining").await.unwrap();
    for (name, category_id) in [("Quick Bite", doomed.id), ("Le Gourmet", kept.id)] {
        restaurants
            .insert(&NewRestaurant {
                name: name.into(),
                address: "1 Main Street".into(),
                city: "Paris".into(),
                category_id,
                rating: 3.0,
            })
            .await
            .unwrap();
    }

    assert!(categories.delete(doomed.id).await.unwrap());
    assert!(!categories.delete(doomed.id).await.unwrap());

    let remaining = restaurants.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Le Gourmet");
    assert!(restaurants.by_category(doomed.id).await.unwrap().is_empty());
}
