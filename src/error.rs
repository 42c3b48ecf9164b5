use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::res;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("access unauthorized")]
    Unauthorized,

    #[error("username or email already taken")]
    AlreadyTaken,

    #[error("password is required")]
    PasswordRequired,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),

    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => res::not_found_page(),
            AppError::Unauthorized => {
                (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
            }
            AppError::AlreadyTaken | AppError::PasswordRequired => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()).into_response()
            }
            err => {
                tracing::error!("request failed: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "something went wrong").into_response()
            }
        }
    }
}
