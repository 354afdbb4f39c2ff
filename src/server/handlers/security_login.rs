use crate::{
    error::Error,
    security::is_authenticated,
    server::{
        app_state::AppState,
        http_errors::{generic_error_redirect, login_redirect, redirect},
    },
};
use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

#[derive(Deserialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

/// GET /login
pub async fn security_login_form(
    state: web::Data<AppState>,
    identity: Option<Identity>,
) -> Result<HttpResponse, Error> {
    if is_authenticated(identity.as_ref()) {
        return Ok(redirect("/secrets"));
    }

    state.render("login", &json!({}))
}

/// POST /login
pub async fn security_login(
    state: web::Data<AppState>,
    request: HttpRequest,
    params: web::Form<LoginParams>,
) -> HttpResponse {
    let user = match state
        .api
        .security()
        .authenticate(&params.username, &params.password)
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => return login_redirect(),
        Err(err) => {
            error!("Failed to authenticate user: {err:?}");
            return generic_error_redirect();
        }
    };

    match Identity::login(&request.extensions(), user.id.to_string()) {
        Ok(_) => {
            info!(user.id = %user.id, "Successfully logged in user.");
            redirect("/secrets")
        }
        Err(err) => {
            error!(user.id = %user.id, "Failed to log in user: {err:?}");
            generic_error_redirect()
        }
    }
}
