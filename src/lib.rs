pub mod caption;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod payload;
pub mod result;

pub use cli::Args;
pub use result::Result;
