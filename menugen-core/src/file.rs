use std::{
    fs,
    io::{self, Write},
    path::{Component, Path, PathBuf},
};

use miette::Diagnostic;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised while validating or writing the output file.
#[derive(Debug, Error, Diagnostic)]
pub enum OutputError {
    #[error("invalid output path '{}': {reason}", path.display())]
    #[diagnostic(
        code(menugen::invalid_output_path),
        help("set [generator].output in menugen.toml or pass --output <FILE>")
    )]
    InvalidPath { path: PathBuf, reason: String },

    #[error("failed to write '{}'", path.display())]
    #[diagnostic(code(menugen::write_failed))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OutputError {
    fn invalid(path: &Path, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Whether missing parent directories may be created during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirPolicy {
    /// Create missing directories.
    #[default]
    Create,
    /// Fail if the containing directory does not exist.
    RequireExisting,
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File contents were replaced
    Written,
    /// Existing file already had identical contents
    Unchanged,
}

/// An output file path that passed validation.
///
/// Holding one of these means the containing directory exists and the
/// path names a file, not a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPath {
    path: PathBuf,
}

impl OutputPath {
    /// Validate `path` as a target for generated output.
    ///
    /// Under [`DirPolicy::Create`] missing parent directories are created.
    pub fn validate(path: impl AsRef<Path>, policy: DirPolicy) -> Result<Self, OutputError> {
        let path = path.as_ref();
        let parent = check_target(path)?;

        if parent.exists() {
            check_is_dir(path, parent)?;
        } else {
            match policy {
                DirPolicy::Create => {
                    fs::create_dir_all(parent).map_err(|e| {
                        OutputError::invalid(
                            path,
                            format!("cannot create directory '{}': {}", parent.display(), e),
                        )
                    })?;
                    tracing::debug!(dir = %parent.display(), "created output directory");
                }
                DirPolicy::RequireExisting => return Err(missing_dir(path, parent)),
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Run the checks of [`validate`](Self::validate) without touching the
    /// file system.
    ///
    /// Under [`DirPolicy::Create`] a missing parent passes when its nearest
    /// existing ancestor is a directory.
    pub fn check(path: impl AsRef<Path>, policy: DirPolicy) -> Result<(), OutputError> {
        let path = path.as_ref();
        let parent = check_target(path)?;

        if parent.exists() {
            return check_is_dir(path, parent);
        }
        match policy {
            DirPolicy::Create => match parent.ancestors().skip(1).find(|dir| dir.exists()) {
                Some(existing) => check_is_dir(path, existing),
                None => Ok(()),
            },
            DirPolicy::RequireExisting => Err(missing_dir(path, parent)),
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Replace the file's contents with `content`.
    ///
    /// The text is written to a temporary file in the same directory and
    /// renamed over the target, so readers never observe a partial file.
    /// Identical existing contents are left untouched.
    pub fn write(&self, content: &str) -> Result<WriteOutcome, OutputError> {
        if fs::read(&self.path).is_ok_and(|existing| existing == content.as_bytes()) {
            return Ok(WriteOutcome::Unchanged);
        }

        let mut tmp =
            NamedTempFile::new_in(self.dir()).map_err(|e| OutputError::write(&self.path, e))?;
        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| OutputError::write(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| OutputError::write(&self.path, e.error))?;

        Ok(WriteOutcome::Written)
    }
}

/// Check that `path` names a file and return its containing directory.
fn check_target(path: &Path) -> Result<&Path, OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::invalid(path, "path is empty"));
    }

    if path
        .as_os_str()
        .to_string_lossy()
        .ends_with(['/', std::path::MAIN_SEPARATOR])
    {
        return Err(OutputError::invalid(path, "path ends with a separator"));
    }

    let file_name = match path.components().next_back() {
        Some(Component::Normal(name)) => name,
        _ => return Err(OutputError::invalid(path, "path does not name a file")),
    };
    if file_name.to_string_lossy().contains('\0') {
        return Err(OutputError::invalid(path, "file name contains a NUL byte"));
    }
    if path.is_dir() {
        return Err(OutputError::invalid(path, "path is an existing directory"));
    }

    Ok(match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    })
}

fn check_is_dir(path: &Path, dir: &Path) -> Result<(), OutputError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(OutputError::invalid(
            path,
            format!("'{}' is not a directory", dir.display()),
        ))
    }
}

fn missing_dir(path: &Path, dir: &Path) -> OutputError {
    OutputError::invalid(path, format!("directory '{}' does not exist", dir.display()))
}
