//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Resolved output file.
    pub output: PathBuf,
    pub base_type: String,
    /// Every tagged type: generated first, then excluded, then skipped.
    pub entries: Vec<CheckEntry>,
}

#[derive(Debug, Serialize)]
pub struct CheckEntry {
    pub type_name: String,
    #[serde(flatten)]
    pub status: EntryStatus,
}

/// How a tagged type would be treated by `generate`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryStatus {
    Generated {
        identifier: String,
        menu_path: String,
        priority: i64,
    },
    /// Failed validation.
    Excluded { reason: String },
    /// Valid, but no unused name was left.
    Skipped,
}

impl CheckReport {
    /// Number of entries `generate` would emit.
    pub fn generated_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, EntryStatus::Generated { .. }))
            .count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("Output", &self.output.display().to_string());
        out.key_value("Base type", &self.base_type);

        if self.entries.is_empty() {
            out.newline();
            out.preformatted("No tagged types; generate would write nothing.");
            return;
        }

        out.newline();
        out.section(&format!("Menu entries ({})", self.generated_count()));
        for entry in &self.entries {
            match &entry.status {
                EntryStatus::Generated {
                    menu_path,
                    priority,
                    ..
                } => out.added_item(&format!(
                    "{} -> \"{}\" (priority {})",
                    entry.type_name, menu_path, priority
                )),
                EntryStatus::Excluded { reason } => {
                    out.removed_item(&format!("{}: {}", entry.type_name, reason))
                }
                EntryStatus::Skipped => out.warning(&format!(
                    "{}: skipped, simple and fully-qualified names are both taken",
                    entry.type_name
                )),
            }
        }
    }
}
