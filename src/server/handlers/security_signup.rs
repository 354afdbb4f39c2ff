use crate::{
    error::Error,
    security::{UserSignupError, is_authenticated},
    server::{
        app_state::AppState,
        http_errors::{generic_error_redirect, redirect},
    },
};
use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

#[derive(Deserialize)]
pub struct SignupParams {
    pub username: String,
    pub password: String,
}

/// GET /signup
pub async fn security_signup_form(
    state: web::Data<AppState>,
    identity: Option<Identity>,
) -> Result<HttpResponse, Error> {
    if is_authenticated(identity.as_ref()) {
        return Ok(redirect("/secrets"));
    }

    state.render("signup", &json!({}))
}

/// POST /signup
pub async fn security_signup(
    state: web::Data<AppState>,
    request: HttpRequest,
    params: web::Form<SignupParams>,
) -> HttpResponse {
    let user = match state
        .api
        .security()
        .signup(&params.username, &params.password)
        .await
    {
        Ok(user) => {
            info!(user.id = %user.id, "Successfully signed up user.");
            user
        }
        Err(err) => {
            return match err.downcast_ref::<UserSignupError>() {
                Some(signup_error) => {
                    warn!("Rejected signup: {signup_error}.");
                    redirect("/signup")
                }
                None => {
                    error!("Failed to signup user: {err:?}");
                    generic_error_redirect()
                }
            };
        }
    };

    match Identity::login(&request.extensions(), user.id.to_string()) {
        Ok(_) => redirect("/secrets"),
        Err(err) => {
            error!(user.id = %user.id, "Failed to log in user after signup: {err:?}");
            generic_error_redirect()
        }
    }
}
