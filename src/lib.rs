pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, RunConfig};
pub use core::{engine::ReplaceEngine, replacer::TextReplacer, table::builtin_table};
pub use utils::error::{ReplaceError, Result};
