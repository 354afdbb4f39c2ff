mod app_state;
mod extractors;
mod handlers;
mod http_errors;

pub use self::{
    app_state::AppState,
    extractors::AuthenticatedUser,
    http_errors::{generic_error_redirect, login_redirect},
};
use crate::{
    api::Api,
    config::{Config, SecurityConfig},
    database::Database,
    templates::create_templates,
};
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};
use anyhow::{Context, anyhow};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
pub async fn run(config: Config, http_port: u16) -> Result<(), anyhow::Error> {
    let db = Database::open(&config.db).await?;
    let session_key = session_key(&config.security)?;

    let state = web::Data::new(AppState::new(
        config.clone(),
        Api::new(config, db),
        create_templates()?,
    ));

    let http_server_url = format!("0.0.0.0:{http_port}");
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(IdentityMiddleware::default())
            // Middleware runs in the reverse order of registration, the session has to be loaded
            // before the identity middleware reads it.
            .wrap(session_middleware(&state.config.security, session_key.clone()))
            .wrap(middleware::NormalizePath::trim())
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(configure_routes)
    });

    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {}.", &http_server_url))?;

    info!("Secrets server is available at http://{http_server_url}");

    http_server
        .run()
        .await
        .with_context(|| "Failed to run Secrets server.")
}

/// Registers all routes of the application.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::get().to(handlers::security_login_form))
        .route("/login", web::post().to(handlers::security_login))
        .route("/signup", web::get().to(handlers::security_signup_form))
        .route("/signup", web::post().to(handlers::security_signup))
        .route("/logout", web::get().to(handlers::security_logout))
        .route("/secrets", web::get().to(handlers::secrets_list))
        .route("/search", web::post().to(handlers::secrets_search))
        .route("/submit", web::get().to(handlers::secrets_submit_form))
        .route("/submit", web::post().to(handlers::secrets_submit))
        .route("/error", web::get().to(handlers::error_page));
}

/// Builds cookie-based session middleware, session content is encrypted with the key.
pub fn session_middleware(
    config: &SecurityConfig,
    key: Key,
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(config.session_cookie_name.clone())
        .cookie_secure(config.secure_cookies)
        .build()
}

fn session_key(config: &SecurityConfig) -> anyhow::Result<Key> {
    match config.session_key {
        Some(ref key) => {
            Key::try_from(key.as_bytes()).map_err(|err| anyhow!("Invalid session key: {err}"))
        }
        None => {
            warn!("Session key is not configured, sessions won't survive a restart.");
            Ok(Key::generate())
        }
    }
}
