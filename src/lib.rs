pub mod api;
pub mod config;
pub mod docs;
pub mod error;
pub mod insights;
pub mod model;
pub mod routes;
