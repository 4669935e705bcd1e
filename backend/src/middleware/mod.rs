//! Request middleware

pub mod auth;

pub use auth::{client_key_middleware, ClientAuthorizer, StaticKeyAuthorizer};
