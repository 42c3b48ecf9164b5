#![allow(dead_code)]

use axum_test::{TestServer, TestServerConfig};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use warbler::{AppState, app, db, models::User};

/// A single connection keeps every query on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let db_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    db::migrate(&db_pool).await.expect("schema");
    db_pool
}

pub fn test_server(db_pool: SqlitePool) -> TestServer {
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(app(AppState { db_pool }), config).expect("test server")
}

pub async fn create_test_user(db_pool: &SqlitePool, username: &str, password: &str) -> User {
    User::signup(
        db_pool,
        username,
        &format!("{username}@email.com"),
        password,
        None,
    )
    .await
    .expect("test user")
}

pub async fn log_in(server: &TestServer, username: &str, password: &str) {
    let response = server
        .post("/login")
        .form(&[("username", username), ("password", password)])
        .await;
    assert!(
        response.status_code().is_redirection(),
        "login for {username} did not redirect: {}",
        response.status_code()
    );
}
