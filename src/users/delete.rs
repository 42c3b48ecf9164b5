use axum::{
    debug_handler,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use tracing::info;

use crate::{AppResult, models::User, session};

#[debug_handler]
pub(crate) async fn delete_user(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let user_id = session::require_user_id(&session).await?;

    User::delete(&db_pool, &user_id).await?;
    info!(%user_id, "account deleted");

    session::log_out(&session).await;
    Ok(Redirect::to("/signup").into_response())
}
