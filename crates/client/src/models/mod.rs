//! Session domain models.

mod user;

pub use user::CurrentUser;
