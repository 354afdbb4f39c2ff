use crate::{
    database::StoreError,
    users::{User, UserId},
};
use std::future::Future;

/// Persistence contract the secrets board reads and writes through. Implementations return plain
/// snapshots, and "nothing found" is an empty result rather than an error.
pub trait SecretsStore {
    /// Returns every user that has at least one secret.
    fn find_users_with_secrets(&self) -> impl Future<Output = Result<Vec<User>, StoreError>>;

    /// Returns every user that has at least one secret with exactly the given title. Returned
    /// users carry all of their secrets, not only the matching ones.
    fn find_users_with_secret_title(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Vec<User>, StoreError>>;

    /// Returns the user with the given ID, if any.
    fn find_user_by_id(&self, id: UserId)
    -> impl Future<Output = Result<Option<User>, StoreError>>;

    /// Persists the user snapshot. Secrets already stored for the user must never be lost, even
    /// if the snapshot was taken before they were added.
    fn save_user(&self, user: &User) -> impl Future<Output = Result<(), StoreError>>;
}
