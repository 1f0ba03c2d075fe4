pub mod auth;
pub mod login_request;
pub mod logout_response;
pub mod register_request;
pub mod session_response;
