mod delete;
mod follows;
mod likes;
mod list;
mod profile;
mod show;

use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, include_res, models::User, res};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_users))
        .route("/profile", get(profile::edit_page).post(profile::edit))
        .route("/delete", post(delete::delete_user))
        .route("/follow/{id}", post(follows::follow))
        .route("/stop-following/{id}", post(follows::stop_following))
        .route("/{id}", get(show::show_user))
        .route("/{id}/following", get(follows::following_page))
        .route("/{id}/followers", get(follows::followers_page))
        .route("/{id}/likes", get(likes::likes_page))
}

pub(crate) fn user_card(user: &User) -> String {
    include_res!(str, "/pages/users/user_card.html")
        .replace("{uuid}", &user.uuid)
        .replace("{username}", &res::esc(&user.username))
        .replace("{image_url}", &res::esc(&user.image_url))
        .replace("{bio}", &res::esc(user.bio.as_deref().unwrap_or("")))
}
