pub mod cli;
pub mod toml_config;

use crate::core::table::{builtin_table, DEFAULT_TARGET_PATH};
use crate::core::{ConfigProvider, ReplacementTable};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_path, validate_unique_keys, Validate};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "desc-replacer")]
#[command(about = "Shorten calculator descriptions in the generated listing file")]
pub struct CliConfig {
    /// File to rewrite in place
    #[arg(long)]
    pub target: Option<String>,

    /// TOML file with [[replacements]] entries, replacing the built-in table
    #[arg(long)]
    pub table: Option<String>,

    /// Report what would change without writing the file
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub json_logs: bool,
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target_path: PathBuf,
    pub table: ReplacementTable,
    pub dry_run: bool,
}

impl RunConfig {
    /// Built-in table against the default listing path.
    pub fn builtin() -> Self {
        Self {
            target_path: PathBuf::from(DEFAULT_TARGET_PATH),
            table: builtin_table(),
            dry_run: false,
        }
    }

    /// Resolves the target path as `--target`, then the table file's
    /// `[target]`, then the default.
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut config = Self::builtin();

        if let Some(table_path) = &cli.table {
            tracing::info!("📁 Loading replacement table from: {}", table_path);
            let file = toml_config::TableConfig::from_file(table_path)?;
            if let Some(path) = file.target_path() {
                config.target_path = PathBuf::from(path);
            }
            config.table = file.to_table()?;
        }

        if let Some(target) = &cli.target {
            config.target_path = PathBuf::from(target);
        }
        config.dry_run = cli.dry_run;

        Ok(config)
    }
}

impl ConfigProvider for RunConfig {
    fn target_path(&self) -> &Path {
        &self.target_path
    }

    fn table(&self) -> &ReplacementTable {
        &self.table
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("target", &self.target_path.to_string_lossy())?;
        validate_table(&self.table)
    }
}

pub fn validate_table(table: &ReplacementTable) -> Result<()> {
    if table.is_empty() {
        return Err(crate::utils::error::ReplaceError::MissingConfigError {
            field: "replacements".to_string(),
        });
    }
    for (i, entry) in table.iter().enumerate() {
        validate_non_empty(&format!("replacements[{}].old", i), &entry.old)?;
    }
    validate_unique_keys(table.iter().map(|r| r.old.as_str()))
}
