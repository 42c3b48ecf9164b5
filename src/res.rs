use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

/// Escapes user-supplied text before it is substituted into a page.
pub fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn flash_html(message: Option<String>) -> String {
    match message {
        Some(message) => format!("<p class=\"flash\">{}</p>", esc(&message)),
        None => String::new(),
    }
}

pub fn not_found_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(include_res!(str, "/pages/not_found.html")),
    )
        .into_response()
}

pub async fn not_found() -> Response {
    not_found_page()
}
