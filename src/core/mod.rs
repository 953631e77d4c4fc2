pub mod engine;
pub mod replacer;
pub mod table;

pub use crate::domain::model::{ContentBuffer, EntryOutcome, ReplaceReport, Replacement, ReplacementTable};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
