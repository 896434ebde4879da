//! Remote data access split across logical submodules.

mod error;
mod users;

pub use error::ApiError;
pub use users::{parse_users, UserSource, UsersClient};
