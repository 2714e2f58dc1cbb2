pub mod auth;
pub mod cli;
pub mod config;
pub mod flow;
pub mod lifecycle;
pub mod logging;
pub mod ui;
