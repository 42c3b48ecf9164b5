use axum::{
    Form, debug_handler,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use validator::Validate;

use crate::{AppResult, forms, forms::MessageForm, include_res, models::Message, session};

fn new_message_html(errors: &str) -> Response {
    Html(include_res!(str, "/pages/messages/new.html").replace("{errors}", errors)).into_response()
}

#[debug_handler]
pub(crate) async fn new_message_page(session: Session) -> AppResult<Response> {
    session::require_user_id(&session).await?;
    Ok(new_message_html(""))
}

#[debug_handler]
pub(crate) async fn new_message(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(form): Form<MessageForm>,
) -> AppResult<Response> {
    let user_id = session::require_user_id(&session).await?;

    if let Err(errors) = form.validate() {
        return Ok(new_message_html(&forms::error_list(&errors)));
    }

    Message::create(&db_pool, &user_id, &form.text).await?;

    Ok(Redirect::to(&format!("/users/{user_id}")).into_response())
}
