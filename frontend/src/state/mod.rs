pub mod auth;

pub use auth::{use_auth, AuthProvider, AuthState, Session};
