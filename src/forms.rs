use serde::Deserialize;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Deserialize, Validate)]
pub struct UserAddForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "Invalid e-mail address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UserEditForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "Invalid e-mail address"))]
    pub email: String,
    pub image_url: Option<String>,
    pub header_image_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MessageForm {
    #[validate(length(min = 1, max = 140, message = "Message must be 1-140 characters"))]
    pub text: String,
}

/// Renders validation failures as list items for the `{errors}` slot.
pub fn error_list(errors: &ValidationErrors) -> String {
    let mut html = String::new();
    for field_errors in errors.field_errors().values() {
        for error in field_errors.iter() {
            let message = error.message.as_deref().unwrap_or("Invalid value");
            html += &format!("<li class=\"form-error\">{message}</li>\n");
        }
    }
    html
}

/// Form inputs submit empty strings for blank optional fields.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
