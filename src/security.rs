mod api_ext;
mod session;
mod stored_credentials;
mod user_signup_error;

pub use self::{
    session::{current_user_id, is_authenticated},
    stored_credentials::StoredCredentials,
    user_signup_error::UserSignupError,
};
