pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod utils;

pub use error::{Error, Result};
