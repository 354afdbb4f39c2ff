mod api_ext;
mod database_ext;
mod secret;
mod secret_id;
mod secret_view;
mod secrets_store;
mod time_ago;

pub use self::{
    secret::Secret,
    secret_id::SecretId,
    secret_view::UserSecretsView,
    secrets_store::SecretsStore,
    time_ago::TimeAgo,
};
