use crate::domain::model::{ContentBuffer, ReplaceReport, ReplacementTable};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_text(&self, path: &Path) -> Result<String>;
    fn write_text(&self, path: &Path, text: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn target_path(&self) -> &Path;
    fn table(&self) -> &ReplacementTable;
    fn dry_run(&self) -> bool;
}

/// The three phases of a run, in order: load, apply_all, save.
pub trait Pipeline {
    fn load(&self) -> Result<ContentBuffer>;
    fn apply_all(&self, buffer: ContentBuffer) -> (ContentBuffer, ReplaceReport);
    fn save(&self, buffer: ContentBuffer) -> Result<String>;
    /// When true the engine stops after apply_all.
    fn dry_run(&self) -> bool;
}
