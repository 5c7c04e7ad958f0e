pub mod config;
pub mod error;
pub mod llm;
pub mod pantry;
pub mod recipes;
pub mod session;
pub mod ui;

pub use error::{Error, Result};
