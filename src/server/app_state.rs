use crate::{api::Api, config::Config, error::Error};
use actix_web::HttpResponse;
use handlebars::Handlebars;
use serde::Serialize;

pub struct AppState {
    pub config: Config,
    pub api: Api,
    pub templates: Handlebars<'static>,
}

impl AppState {
    pub fn new(config: Config, api: Api, templates: Handlebars<'static>) -> Self {
        Self {
            config,
            api,
            templates,
        }
    }

    /// Renders the page template into an HTML response.
    pub fn render<T: Serialize>(&self, page: &str, data: &T) -> Result<HttpResponse, Error> {
        let html = self
            .templates
            .render(page, data)
            .map_err(anyhow::Error::from)?;
        Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html))
    }
}
