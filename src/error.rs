mod error_kind;

use crate::server::{generic_error_redirect, login_redirect};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use anyhow::anyhow;
use std::fmt::{Debug, Display, Formatter};

pub use error_kind::ErrorKind;

/// Application native error type.
#[derive(thiserror::Error)]
pub struct Error {
    root_cause: anyhow::Error,
    kind: ErrorKind,
}

impl Error {
    /// Creates a Client error instance with the given message.
    pub fn client<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::ClientError,
        }
    }

    /// Creates an error for requests that lack an authenticated session.
    pub fn unauthenticated() -> Self {
        Self {
            root_cause: anyhow!("Unauthenticated"),
            kind: ErrorKind::Unauthenticated,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::ClientError => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthenticated | ErrorKind::Unknown => StatusCode::FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.kind {
            ErrorKind::ClientError => HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(self.root_cause.to_string()),
            ErrorKind::Unauthenticated => login_redirect(),
            ErrorKind::Unknown => generic_error_redirect(),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        err.downcast::<Error>().unwrap_or_else(|root_cause| Error {
            root_cause,
            kind: ErrorKind::Unknown,
        })
    }
}
