use crate::{error::Error, server::app_state::AppState};
use actix_web::{HttpResponse, web};
use serde_json::json;

pub async fn error_page(state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    state.render("error", &json!({}))
}
