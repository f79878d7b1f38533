//! Domain entities - the core business objects.

mod blogpost;

mod user;

pub use blogpost::{Blogpost, BlogpostUpdate, MAX_TITLE_CHARS};
pub use user::User;
