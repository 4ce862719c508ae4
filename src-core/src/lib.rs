pub mod budget;
pub mod constants;
pub mod errors;
pub mod fiscal;
pub mod roadmap;
pub mod settings;

pub use errors::{Error, Result, ValidationError};
