pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod handlers;
pub mod html;
pub mod models;
pub mod scoring;
pub mod state;
pub mod urls;
