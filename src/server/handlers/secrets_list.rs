use crate::{
    error::Error,
    server::{AuthenticatedUser, app_state::AppState, http_errors::generic_error_redirect},
};
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::error;

/// GET /secrets
pub async fn secrets_list(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, Error> {
    match state.api.secrets().list_all().await {
        Ok(users_with_secrets) => state.render(
            "secrets",
            &json!({
                "usersWithSecrets": users_with_secrets,
                "titles": state.config.secrets.titles
            }),
        ),
        Err(err) => {
            error!(user.id = %user.id, "Failed to list secrets: {err:?}");
            Ok(generic_error_redirect())
        }
    }
}
