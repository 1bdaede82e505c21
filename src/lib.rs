pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{SqliteStore, TerminalPrompter};
pub use crate::config::Settings;
pub use crate::core::{
    actions::Report,
    dispatcher::{Dispatcher, LoopControl},
};
pub use crate::domain::model::Action;
pub use crate::utils::error::{AppError, Result};
