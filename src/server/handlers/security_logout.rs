use crate::server::http_errors::login_redirect;
use actix_identity::Identity;
use actix_web::HttpResponse;

/// GET /logout
pub async fn security_logout(identity: Option<Identity>) -> HttpResponse {
    if let Some(user) = identity {
        user.logout();
    }

    login_redirect()
}
