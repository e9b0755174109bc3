//! Generate command report data structures.

use std::path::PathBuf;

use menugen_codegen::Diagnostic;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Target file.
    pub output: PathBuf,
    /// Entries in the generated file, in order.
    pub entries: Vec<GeneratedEntry>,
    /// Non-fatal findings from the run.
    pub diagnostics: Vec<Diagnostic>,
    pub result: GenerateResult,
}

/// A menu entry in the generated file.
#[derive(Debug)]
pub struct GeneratedEntry {
    pub identifier: String,
    pub type_name: String,
}

/// What happened to the output file.
#[derive(Debug)]
pub enum GenerateResult {
    /// The file was (re)written.
    Written,
    /// The file already had the generated contents.
    Unchanged,
    /// No eligible types; the file was not touched.
    NothingToGenerate,
    /// Dry-run preview.
    Preview { content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in self.diagnostics.iter().filter(|d| d.severity.is_warning()) {
            out.warning(&diag.to_string());
        }

        let output = self.output.display().to_string();
        match &self.result {
            GenerateResult::Preview { content } => {
                out.divider(&output);
                out.preformatted(content);
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} would be generated",
                    plural(self.entries.len(), "menu entry", "menu entries")
                ));
            }
            GenerateResult::NothingToGenerate => {
                out.preformatted("No eligible types found; nothing was written.");
            }
            GenerateResult::Written | GenerateResult::Unchanged => {
                out.section(&format!("Menu entries ({})", self.entries.len()));
                for entry in &self.entries {
                    out.added_item(&format!("{} ({})", entry.identifier, entry.type_name));
                }
                out.newline();
                let status = if matches!(self.result, GenerateResult::Unchanged) {
                    "Up to date"
                } else {
                    "Generated"
                };
                out.key_value(status, &output);
            }
        }
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}
