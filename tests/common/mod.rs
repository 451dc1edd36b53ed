#![allow(dead_code)]

use axum::Router;
use shortlink::api::routes::shortener_routes;
use shortlink::application::services::LinkService;
use shortlink::infrastructure::liveness::NoopValidator;
use shortlink::infrastructure::persistence::PgLinkRepository;
use shortlink::state::AppState;
use shortlink::utils::key_generator::KeyGenerator;
use sqlx::PgPool;
use std::sync::Arc;

/// Builds application state over a test pool.
///
/// Wires the no-op liveness validator so tests never make outbound requests.
pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let link_service = Arc::new(LinkService::new(
        repository,
        KeyGenerator::new(),
        Arc::new(NoopValidator::new()),
    ));

    AppState {
        link_service,
        db: pool,
    }
}

/// The production shortener routes mounted at their real base path.
pub fn test_app(pool: PgPool) -> Router {
    let state = create_test_state(pool);
    Router::new()
        .nest("/api/v1/shortener", shortener_routes())
        .with_state(state)
}

pub async fn create_test_link(pool: &PgPool, key: &str, url: &str) {
    sqlx::query(r#"INSERT INTO links ("key", url) VALUES ($1, $2)"#)
        .bind(key)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links_with_key(pool: &PgPool, key: &str) -> i64 {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM links WHERE "key" = $1"#)
        .bind(key)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn url_for_key(pool: &PgPool, key: &str) -> Option<String> {
    sqlx::query_scalar(r#"SELECT url FROM links WHERE "key" = $1"#)
        .bind(key)
        .fetch_optional(pool)
        .await
        .unwrap()
}
