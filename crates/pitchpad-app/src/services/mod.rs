//! Platform services for the desktop shell.

mod auth;

pub use auth::AuthService;
