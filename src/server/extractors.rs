mod authenticated_user;

pub use self::authenticated_user::AuthenticatedUser;
