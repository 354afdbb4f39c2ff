mod error_page;
mod secrets_list;
mod secrets_search;
mod secrets_submit;
mod security_login;
mod security_logout;
mod security_signup;

pub use self::{
    error_page::error_page,
    secrets_list::secrets_list,
    secrets_search::secrets_search,
    secrets_submit::{secrets_submit, secrets_submit_form},
    security_login::{security_login, security_login_form},
    security_logout::security_logout,
    security_signup::{security_signup, security_signup_form},
};
