mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn list_users_is_public() {
    let db_pool = common::test_pool().await;
    common::create_test_user(&db_pool, "testuser", "password").await;
    let server = common::test_server(db_pool);

    let response = server.get("/users").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("@testuser"));
}

#[tokio::test]
async fn list_users_search_filters_by_username() {
    let db_pool = common::test_pool().await;
    common::create_test_user(&db_pool, "warblefan", "password").await;
    common::create_test_user(&db_pool, "someoneelse", "password").await;
    let server = common::test_server(db_pool);

    let response = server.get("/users").add_query_param("q", "warble").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.text();
    assert!(body.contains("@warblefan"));
    assert!(!body.contains("@someoneelse"));
}

#[tokio::test]
async fn show_user_page() {
    let db_pool = common::test_pool().await;
    let user = common::create_test_user(&db_pool, "testuser", "password").await;
    let server = common::test_server(db_pool);

    let response = server.get(&format!("/users/{}", user.uuid)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("@testuser"));
}

#[tokio::test]
async fn unknown_user_is_404() {
    let db_pool = common::test_pool().await;
    let server = common::test_server(db_pool);

    let response = server.get("/users/xxx").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server
        .get("/users/00000000-0000-7000-8000-000000000000")
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn following_page_requires_login() {
    let db_pool = common::test_pool().await;
    let user = common::create_test_user(&db_pool, "testuser", "password").await;
    let server = common::test_server(db_pool);

    let response = server.get(&format!("/users/{}/following", user.uuid)).await;
    assert_eq!(response.status_code(), StatusCode::FOUND);

    let response = server.get(&format!("/users/{}/followers", user.uuid)).await;
    assert_eq!(response.status_code(), StatusCode::FOUND);

    let response = server.get(&format!("/users/{}/likes", user.uuid)).await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
}

#[tokio::test]
async fn following_page_visible_when_logged_in() {
    let db_pool = common::test_pool().await;
    let user = common::create_test_user(&db_pool, "testuser", "password").await;
    let server = common::test_server(db_pool);

    common::log_in(&server, "testuser", "password").await;

    let response = server.get(&format!("/users/{}/following", user.uuid)).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.get(&format!("/users/{}/followers", user.uuid)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn follow_and_stop_following_flow() {
    let db_pool = common::test_pool().await;
    let me = common::create_test_user(&db_pool, "me", "password").await;
    let other = common::create_test_user(&db_pool, "other", "password").await;
    let server = common::test_server(db_pool);

    common::log_in(&server, "me", "password").await;

    let response = server.post(&format!("/users/follow/{}", other.uuid)).await;
    assert!(response.status_code().is_redirection());

    let response = server.get(&format!("/users/{}/following", me.uuid)).await;
    assert!(response.text().contains("@other"));

    let response = server
        .post(&format!("/users/stop-following/{}", other.uuid))
        .await;
    assert!(response.status_code().is_redirection());

    let response = server.get(&format!("/users/{}/following", me.uuid)).await;
    assert!(!response.text().contains("@other"));
}

#[tokio::test]
async fn follow_unknown_user_is_404() {
    let db_pool = common::test_pool().await;
    common::create_test_user(&db_pool, "me", "password").await;
    let server = common::test_server(db_pool);

    common::log_in(&server, "me", "password").await;

    let response = server.post("/users/follow/xxx").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn signup_flow_logs_user_in() {
    let db_pool = common::test_pool().await;
    let server = common::test_server(db_pool);

    let response = server
        .post("/signup")
        .form(&[
            ("username", "newbie"),
            ("email", "newbie@email.com"),
            ("password", "password"),
            ("image_url", ""),
        ])
        .await;
    assert!(response.status_code().is_redirection());

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Your feed"));
}

#[tokio::test]
async fn signup_duplicate_username_rerenders_form() {
    let db_pool = common::test_pool().await;
    common::create_test_user(&db_pool, "taken", "password").await;
    let server = common::test_server(db_pool);

    let response = server
        .post("/signup")
        .form(&[
            ("username", "taken"),
            ("email", "fresh@email.com"),
            ("password", "password"),
            ("image_url", ""),
        ])
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Username already taken"));
}

#[tokio::test]
async fn signup_short_password_shows_error() {
    let db_pool = common::test_pool().await;
    let server = common::test_server(db_pool);

    let response = server
        .post("/signup")
        .form(&[
            ("username", "newbie"),
            ("email", "newbie@email.com"),
            ("password", "short"),
            ("image_url", ""),
        ])
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(
        response
            .text()
            .contains("Password must be at least 6 characters")
    );
}

#[tokio::test]
async fn login_wrong_password_rerenders_form() {
    let db_pool = common::test_pool().await;
    common::create_test_user(&db_pool, "testuser", "password").await;
    let server = common::test_server(db_pool);

    let response = server
        .post("/login")
        .form(&[("username", "testuser"), ("password", "wrongpass")])
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Invalid credentials."));
}

#[tokio::test]
async fn logout_clears_session() {
    let db_pool = common::test_pool().await;
    let user = common::create_test_user(&db_pool, "testuser", "password").await;
    let server = common::test_server(db_pool);

    common::log_in(&server, "testuser", "password").await;

    let response = server.get("/logout").await;
    assert!(response.status_code().is_redirection());

    let response = server.get(&format!("/users/{}/following", user.uuid)).await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
}

#[tokio::test]
async fn edit_profile_requires_correct_password() {
    let db_pool = common::test_pool().await;
    let user = common::create_test_user(&db_pool, "testuser", "password").await;
    let server = common::test_server(db_pool);

    common::log_in(&server, "testuser", "password").await;

    let response = server
        .post("/users/profile")
        .form(&[
            ("username", "testuser"),
            ("email", "testuser@email.com"),
            ("image_url", ""),
            ("header_image_url", ""),
            ("bio", "warbling away"),
            ("location", ""),
            ("password", "wrongpass"),
        ])
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Invalid password"));

    let response = server
        .post("/users/profile")
        .form(&[
            ("username", "testuser"),
            ("email", "testuser@email.com"),
            ("image_url", ""),
            ("header_image_url", ""),
            ("bio", "warbling away"),
            ("location", ""),
            ("password", "password"),
        ])
        .await;
    assert!(response.status_code().is_redirection());

    let response = server.get(&format!("/users/{}", user.uuid)).await;
    assert!(response.text().contains("warbling away"));
}

#[tokio::test]
async fn delete_account_flow() {
    let db_pool = common::test_pool().await;
    let user = common::create_test_user(&db_pool, "testuser", "password").await;
    let server = common::test_server(db_pool);

    common::log_in(&server, "testuser", "password").await;

    let response = server.post("/users/delete").await;
    assert!(response.status_code().is_redirection());

    let response = server.get(&format!("/users/{}", user.uuid)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
