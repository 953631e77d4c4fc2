use crate::core::{
    ConfigProvider, ContentBuffer, EntryOutcome, Pipeline, ReplaceReport, Result, Storage,
};

pub struct TextReplacer<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> TextReplacer<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let overlaps = config.table().overlapping_pairs();
        for (i, j) in overlaps {
            if i == j {
                tracing::warn!(
                    "Replacement #{} contains its own old text; a second run will match it again",
                    i + 1
                );
            } else {
                tracing::warn!(
                    "Replacement #{} produces text matched by #{}; result depends on table order",
                    i + 1,
                    j + 1
                );
            }
        }
        Self { storage, config }
    }

}

impl<S: Storage, C: ConfigProvider> Pipeline for TextReplacer<S, C> {
    fn load(&self) -> Result<ContentBuffer> {
        let path = self.config.target_path();
        tracing::debug!("Reading {}", path.display());
        let text = self.storage.read_text(path)?;
        tracing::debug!("Loaded {} bytes", text.len());
        Ok(ContentBuffer::new(text))
    }

    fn apply_all(&self, mut buffer: ContentBuffer) -> (ContentBuffer, ReplaceReport) {
        let mut report = ReplaceReport::default();

        for entry in self.config.table() {
            let occurrences = buffer.replace_all(&entry.old, &entry.new);
            let outcome = if occurrences > 0 {
                tracing::debug!("{} occurrence(s) of {:?}", occurrences, entry.preview(50));
                EntryOutcome::Replaced { occurrences }
            } else {
                tracing::debug!("No match for {:?}", entry.preview(50));
                EntryOutcome::NotFound
            };
            report.push(entry.clone(), outcome);
        }

        (buffer, report)
    }

    fn save(&self, buffer: ContentBuffer) -> Result<String> {
        let path = self.config.target_path();
        let text = buffer.into_string();
        self.storage.write_text(path, &text)?;
        tracing::debug!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(path.display().to_string())
    }

    fn dry_run(&self) -> bool {
        self.config.dry_run()
    }
}
