mod login;
mod logout;
mod signup;

use axum::{Router, routing::get};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", get(signup::signup_page).post(signup::signup))
        .route("/login", get(login::login_page).post(login::login))
        .route("/logout", get(logout::logout))
}
