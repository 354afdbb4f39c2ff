mod database_ext;
mod user;
mod user_id;

pub(crate) use self::database_ext::RawUserSecret;
pub use self::{user::User, user_id::UserId};
