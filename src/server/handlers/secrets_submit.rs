use crate::{
    error::Error,
    server::{
        AuthenticatedUser,
        app_state::AppState,
        http_errors::{generic_error_redirect, redirect},
    },
};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

#[derive(Deserialize)]
pub struct SubmitParams {
    #[serde(default)]
    pub title: String,
    pub secret: String,
}

/// GET /submit
pub async fn secrets_submit_form(
    state: web::Data<AppState>,
    _: AuthenticatedUser,
) -> Result<HttpResponse, Error> {
    state.render("submit", &json!({ "titles": state.config.secrets.titles }))
}

/// POST /submit
pub async fn secrets_submit(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    params: web::Form<SubmitParams>,
) -> HttpResponse {
    match state
        .api
        .secrets()
        .append_secret(user.id, &params.title, &params.secret)
        .await
    {
        Ok(_) => redirect("/secrets"),
        Err(err) => {
            error!(user.id = %user.id, "Failed to submit secret: {err:?}");
            generic_error_redirect()
        }
    }
}
