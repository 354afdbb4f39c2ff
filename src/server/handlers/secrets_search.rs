use crate::{
    error::Error,
    server::{AuthenticatedUser, app_state::AppState, http_errors::generic_error_redirect},
};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub search_title: String,
}

/// POST /search
pub async fn secrets_search(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    params: web::Form<SearchParams>,
) -> Result<HttpResponse, Error> {
    if !state.config.secrets.titles {
        return Err(Error::client("Searching secrets by title is disabled."));
    }

    match state
        .api
        .secrets()
        .search_by_title(&params.search_title)
        .await
    {
        Ok(users_with_secrets) => state.render(
            "search_results",
            &json!({
                "usersWithSecrets": users_with_secrets,
                "searchTitle": params.search_title
            }),
        ),
        Err(err) => {
            error!(user.id = %user.id, "Failed to search secrets: {err:?}");
            Ok(generic_error_redirect())
        }
    }
}
