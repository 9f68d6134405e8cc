pub mod commands;
pub mod error;
pub mod resample;
pub mod tasks;
pub mod utils;

pub use error::RegenError;
