mod message;
mod user;

pub use message::Message;
pub use user::{DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL, User};
