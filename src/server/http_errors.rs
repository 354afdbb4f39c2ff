use actix_web::{HttpResponse, http::header};

/// Redirects the browser to the specified location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Redirects to the generic error page, details are only available in the logs.
pub fn generic_error_redirect() -> HttpResponse {
    redirect("/error")
}

/// Redirects to the login page.
pub fn login_redirect() -> HttpResponse {
    redirect("/login")
}

#[cfg(test)]
mod tests {
    use super::{generic_error_redirect, login_redirect, redirect};

    #[test]
    fn creates_redirects() -> anyhow::Result<()> {
        let response = generic_error_redirect();
        assert_eq!(response.status().as_u16(), 302);
        assert_eq!(response.headers().get("location").unwrap(), "/error");

        let response = login_redirect();
        assert_eq!(response.status().as_u16(), 302);
        assert_eq!(response.headers().get("location").unwrap(), "/login");

        assert_eq!(
            redirect("/secrets").headers().get("location").unwrap(),
            "/secrets"
        );

        Ok(())
    }
}
