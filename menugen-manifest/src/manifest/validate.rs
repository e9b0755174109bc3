//! Validation context and utilities for manifest parsing.

use std::{path::Path, sync::Arc};

use menugen_core::is_type_name;
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested tables.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "menugen.toml");
/// ctx.push("types").validate_type_name("Game.Sword", "type name", None)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["types", "Game.Sword"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "base type in 'types.Game.Sword'" or just "type name".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate that `name` is a fully-qualified type name.
    ///
    /// When no span is given, the name is looked up in the source.
    pub fn validate_type_name(
        &self,
        name: &str,
        kind: &str,
        span: Option<SourceSpan>,
    ) -> Result<()> {
        if is_type_name(name) {
            return Ok(());
        }

        let span = span.or_else(|| find_name_span(self.source.src(), name));
        Err(self
            .source
            .invalid_type_name_error(name, self.context_for(kind), span))
    }

    /// Validate the output path setting.
    pub fn validate_output(&self, output: &Path) -> Result<()> {
        if output.as_os_str().is_empty() {
            return Err(self.source.validation_error(
                "output path cannot be empty",
                find_key_span(self.source.src(), "output"),
            ));
        }
        Ok(())
    }
}

/// Find the span of a type name in the TOML source.
///
/// Searches for quoted table keys like `[types."Game.Sword"]`, then for a
/// quoted string value.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let key_patterns = [format!("types.\"{}\"", name), format!("types.'{}'", name)];
    for pattern in &key_patterns {
        if let Some(pos) = src.find(pattern) {
            // skip `types."`
            let start = pos + 7;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    let value_patterns = [format!("\"{}\"", name), format!("'{}'", name)];
    for pattern in &value_patterns {
        if let Some(pos) = src.find(pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    None
}

/// Find the span of a `key = ...` assignment in the TOML source.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    src.lines()
        .scan(0usize, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1;
            Some((start, line))
        })
        .find_map(|(start, line)| {
            let trimmed = line.trim_start();
            let rest = trimmed.strip_prefix(key)?;
            if !rest.trim_start().starts_with('=') {
                return None;
            }
            let indent = line.len() - trimmed.len();
            Some(SourceSpan::from((start + indent, line.len() - indent)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_name_span_table_key() {
        let src = "[types.\"Game.Sword\"]\n";
        let span = find_name_span(src, "Game.Sword").unwrap();
        assert_eq!(span.offset(), 8);
        assert_eq!(span.len(), "Game.Sword".len());
    }

    #[test]
    fn test_find_name_span_value() {
        let src = "extends = \"Bad Name\"\n";
        let span = find_name_span(src, "Bad Name").unwrap();
        assert_eq!(span.offset(), 11);
    }

    #[test]
    fn test_find_name_span_missing() {
        assert!(find_name_span("[generator]\n", "Nope").is_none());
    }

    #[test]
    fn test_find_key_span() {
        let src = "[generator]\n  output = \"\"\n";
        let span = find_key_span(src, "output").unwrap();
        assert_eq!(span.offset(), 14);
        assert_eq!(span.len(), "output = \"\"".len());
    }

    #[test]
    fn test_find_key_span_ignores_prefix_matches() {
        let src = "outputs = 1\n";
        assert!(find_key_span(src, "output").is_none());
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "menugen.toml");
        assert_eq!(ctx.context_for("type name"), "type name");
        assert_eq!(
            ctx.push("types").push("Game.Sword").context_for("base type"),
            "base type in 'types.Game.Sword'"
        );
    }
}
