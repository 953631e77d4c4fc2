use crate::core::{EntryOutcome, Pipeline, ReplaceReport, Result};
use crate::utils::error::ReplaceError;
use std::io::Write;

const PREVIEW_CHARS: usize = 50;

/// Result of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    pub report: ReplaceReport,
    /// `None` for a dry run.
    pub saved_to: Option<String>,
}

pub struct ReplaceEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReplaceEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs with the transcript on stdout.
    pub fn run(&self) -> Result<RunSummary> {
        let stdout = std::io::stdout();
        self.run_with_output(&mut stdout.lock())
    }

    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        tracing::info!("Starting description update");

        let buffer = self.pipeline.load()?;
        let (buffer, report) = self.pipeline.apply_all(buffer);

        for (entry, outcome) in &report.outcomes {
            let line = match outcome {
                EntryOutcome::Replaced { .. } => {
                    format!("✅ Replaced: {}...", entry.preview(PREVIEW_CHARS))
                }
                EntryOutcome::NotFound => {
                    format!("❌ Not found: {}...", entry.preview(PREVIEW_CHARS))
                }
            };
            writeln!(out, "{}", line).map_err(ReplaceError::OutputError)?;
        }
        tracing::info!(
            "{} replaced, {} not found",
            report.replaced_count(),
            report.missed_count()
        );

        if self.pipeline.dry_run() {
            tracing::info!("🔍 DRY RUN MODE - target file left untouched");
            writeln!(out, "✨ Dry run complete, no changes written.")
                .map_err(ReplaceError::OutputError)?;
            return Ok(RunSummary {
                report,
                saved_to: None,
            });
        }

        let saved_to = self.pipeline.save(buffer)?;
        writeln!(out, "✨ Description update complete!").map_err(ReplaceError::OutputError)?;

        Ok(RunSummary {
            report,
            saved_to: Some(saved_to),
        })
    }
}
