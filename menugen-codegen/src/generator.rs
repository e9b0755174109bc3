//! The generation run: validate, resolve, emit, write.

use std::path::{Path, PathBuf};

use menugen_core::{OutputError, OutputPath, WriteOutcome};
use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::{
    Candidate, CandidateSource, Diagnostic, Emitter, GenerationConfig, NameResolver, Rejection,
    ResolvedCandidate, Validator,
    template::{HostTemplate, UNITY_CSHARP},
};

/// Errors that end a generation run.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum GenerateError {
    #[error("create-asset menu was not generated: output path is invalid")]
    InvalidOutputPath(
        #[source]
        #[diagnostic_source]
        OutputError,
    ),

    #[error("create-asset menu was not generated: output file could not be written")]
    WriteFailure(
        #[source]
        #[diagnostic_source]
        OutputError,
    ),
}

/// A candidate the validator turned away.
#[derive(Debug, Clone)]
pub struct RejectedCandidate {
    pub candidate: Candidate,
    pub rejection: Rejection,
}

/// Everything a run decides before touching the file system.
#[derive(Debug, Default)]
pub struct Plan {
    /// Entries to generate, in ordinal order.
    pub entries: Vec<ResolvedCandidate>,
    pub rejected: Vec<RejectedCandidate>,
    /// Valid candidates skipped because every name form was taken.
    pub exhausted: Vec<Candidate>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Plan {
    /// Number of menu entries that will be generated.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of a completed run.
#[derive(Debug)]
pub struct GenerationReport {
    pub output: PathBuf,
    /// `None` when there was nothing to generate and no file was touched.
    pub outcome: Option<WriteOutcome>,
    pub plan: Plan,
}

impl GenerationReport {
    /// Number of menu entries generated.
    pub fn count(&self) -> usize {
        self.plan.count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.plan.diagnostics
    }
}

/// Drives a generation run from a candidate source to the output file.
pub struct Generator<'a> {
    config: &'a GenerationConfig,
    source: &'a dyn CandidateSource,
    template: &'a dyn HostTemplate,
}

impl<'a> Generator<'a> {
    /// Create a generator using the Unity C# template.
    pub fn new(config: &'a GenerationConfig, source: &'a dyn CandidateSource) -> Self {
        Self {
            config,
            source,
            template: &UNITY_CSHARP,
        }
    }

    pub fn with_template(mut self, template: &'a dyn HostTemplate) -> Self {
        self.template = template;
        self
    }

    /// Check the output path as [`run`](Self::run) would, without creating
    /// any directory.
    pub fn check_output(&self) -> Result<(), GenerateError> {
        OutputPath::check(&self.config.output, self.config.dir_policy)
            .map_err(GenerateError::InvalidOutputPath)
    }

    /// Fetch, validate and resolve candidates without emitting anything.
    pub fn plan(&self) -> Plan {
        let mut plan = Plan::default();
        let validator = Validator::new(&self.config.base_type);

        let mut valid = Vec::new();
        for candidate in self.source.candidates() {
            match validator.check(&candidate) {
                Ok(()) => valid.push(candidate),
                Err(rejection) => {
                    tracing::debug!(
                        ty = %candidate.ty.full_name,
                        %rejection,
                        "candidate excluded"
                    );
                    plan.diagnostics.push(
                        Diagnostic::info("validate", format!("excluded: {}", rejection))
                            .at(&candidate.ty.full_name),
                    );
                    plan.rejected.push(RejectedCandidate {
                        candidate,
                        rejection,
                    });
                }
            }
        }

        let resolution =
            NameResolver::new(&self.config.prefix, &self.config.suffix).resolve_all(valid);
        for candidate in &resolution.exhausted {
            plan.diagnostics.push(
                Diagnostic::warning(
                    "resolve",
                    "skipped: both the simple and the fully-qualified name are already used",
                )
                .at(&candidate.ty.full_name),
            );
        }

        plan.entries = resolution.resolved;
        plan.exhausted = resolution.exhausted;
        plan
    }

    /// Render the file for `plan`.
    pub fn emit(&self, plan: &Plan) -> String {
        Emitter::new(self.template).emit(&plan.entries, self.config)
    }

    /// The text a run would write, or `None` if there is nothing to generate.
    pub fn preview(&self) -> Option<String> {
        let plan = self.plan();
        (!plan.is_empty()).then(|| self.emit(&plan))
    }

    /// Run generation end to end.
    ///
    /// The output path is validated before any candidate is looked at. An
    /// empty plan is a successful no-op: the output file is not touched, so
    /// a file from an earlier run stays in place.
    pub fn run(&self) -> Result<GenerationReport, GenerateError> {
        let output = OutputPath::validate(&self.config.output, self.config.dir_policy)
            .map_err(GenerateError::InvalidOutputPath)?;

        let mut plan = self.plan();

        if plan.is_empty() {
            tracing::info!(
                output = %output.as_path().display(),
                "no eligible types; output left untouched"
            );
            plan.diagnostics.push(
                Diagnostic::info("write", "no eligible types; no file written")
                    .at(output.as_path().display().to_string()),
            );
            return Ok(report(output.as_path(), None, plan));
        }

        let text = self.emit(&plan);
        let outcome = output.write(&text).map_err(GenerateError::WriteFailure)?;

        tracing::info!(
            output = %output.as_path().display(),
            entries = plan.count(),
            template = self.template.name(),
            ?outcome,
            "create-asset menu generated"
        );

        Ok(report(output.as_path(), Some(outcome), plan))
    }
}

fn report(output: &Path, outcome: Option<WriteOutcome>, plan: Plan) -> GenerationReport {
    GenerationReport {
        output: output.to_path_buf(),
        outcome,
        plan,
    }
}
