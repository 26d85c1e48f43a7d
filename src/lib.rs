// src/lib.rs
pub mod command;
pub mod config;
pub mod error;
pub mod models;
pub mod plugin;
pub mod selector;
pub mod settings;
pub mod ticker;
pub mod vault;
pub mod workspace;

pub use config::*;
pub use error::*;
pub use models::*;
pub use plugin::*;
pub use selector::*;
