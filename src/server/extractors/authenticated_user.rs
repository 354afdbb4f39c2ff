use crate::{error::Error as AppError, security::current_user_id, users::UserId};
use actix_identity::Identity;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload};
use std::{future::Future, pin::Pin};
use tracing::{debug, warn};

/// ID of the user behind an authenticated session. Handlers that take it are only invoked for
/// authenticated requests, everybody else is redirected to the login page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let Some(identity) = Option::<Identity>::extract(&req).await? else {
                debug!(http.path = req.path(), "Unauthenticated request.");
                return Err(AppError::unauthenticated().into());
            };

            match current_user_id(&identity) {
                Ok(id) => Ok(AuthenticatedUser { id }),
                Err(err) => {
                    warn!(http.path = req.path(), "Session is not usable: {err:?}");
                    identity.logout();
                    Err(AppError::unauthenticated().into())
                }
            }
        })
    }
}
