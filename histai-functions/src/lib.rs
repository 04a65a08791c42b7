#![forbid(unsafe_code)]

pub mod config;
pub mod digest;
pub mod email;
pub mod handlers;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validate;
