use crate::users::UserId;
use actix_identity::Identity;
use anyhow::Context;

/// Checks whether the request carries a valid authenticated session.
pub fn is_authenticated(identity: Option<&Identity>) -> bool {
    identity.is_some_and(|identity| current_user_id(identity).is_ok())
}

/// Resolves the ID of the user the session belongs to.
pub fn current_user_id(identity: &Identity) -> anyhow::Result<UserId> {
    identity
        .id()
        .with_context(|| "Session doesn't carry user identity.")?
        .parse::<UserId>()
        .with_context(|| "Session carries malformed user identity.")
}
