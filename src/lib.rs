pub mod commands;
pub mod config;
pub mod cursor;
pub mod display_line;
pub mod document;
pub mod editor;
pub mod error;
pub mod file;
pub mod logging;
pub mod renderer;
pub mod window;

pub use error::{Error, Result};
