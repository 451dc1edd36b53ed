mod common;

use shortlink::domain::entities::NewLink;
use shortlink::domain::repositories::LinkRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_save_assigns_id_and_timestamp(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .save(NewLink {
            key: "test123".to_string(),
            url: "https://example.com".to_string(),
        })
        .await
        .unwrap();

    assert!(link.id > 0);
    assert_eq!(link.key, "test123");
    assert_eq!(link.url, "https://example.com");
    assert!(link.created_at <= chrono::Utc::now());
}

#[sqlx::test]
async fn test_find_by_key(pool: PgPool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_key("abc123").await.unwrap();

    let link = link.unwrap();
    assert_eq!(link.key, "abc123");
    assert_eq!(link.url, "https://example.com");
}

#[sqlx::test]
async fn test_find_by_key_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_key("notfound").await.unwrap();

    assert!(link.is_none());
}

#[sqlx::test]
async fn test_exists_by_key(pool: PgPool) {
    common::create_test_link(&pool, "taken", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.exists_by_key("taken").await.unwrap());
    assert!(!repo.exists_by_key("free").await.unwrap());
}

#[sqlx::test]
async fn test_save_duplicate_key_is_store_conflict(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    repo.save(NewLink {
        key: "dup".to_string(),
        url: "https://first.example".to_string(),
    })
    .await
    .unwrap();

    let result = repo
        .save(NewLink {
            key: "dup".to_string(),
            url: "https://second.example".to_string(),
        })
        .await;

    match result.unwrap_err() {
        AppError::StoreConflict { constraint } => {
            assert_eq!(constraint.as_deref(), Some("links_key_key"));
        }
        other => panic!("expected StoreConflict, got {other:?}"),
    }

    // The first mapping survives untouched.
    assert_eq!(
        common::url_for_key(&pool, "dup").await.as_deref(),
        Some("https://first.example")
    );
}

#[sqlx::test]
async fn test_roundtrip_preserves_url(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let saved = repo
        .save(NewLink {
            key: "round1".to_string(),
            url: "https://example.com/path?q=1#frag".to_string(),
        })
        .await
        .unwrap();

    let found = repo.find_by_key("round1").await.unwrap().unwrap();
    assert_eq!(found.id, saved.id);
    assert_eq!(found.url, "https://example.com/path?q=1#frag");
    assert_eq!(found.created_at, saved.created_at);
}
