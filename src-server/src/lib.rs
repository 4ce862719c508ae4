pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod main_lib;
