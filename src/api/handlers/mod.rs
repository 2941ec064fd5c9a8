//! HTTP request handlers.

pub mod health;
pub mod history;
pub mod password;
pub mod settings;
