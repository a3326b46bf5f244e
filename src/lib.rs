pub mod auth;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod store;
