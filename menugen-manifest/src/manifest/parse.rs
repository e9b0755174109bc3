//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "menugen.toml")
    }
}

impl Manifest {
    /// Parse a menugen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a menugen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    let generator = ctx.push("generator");
    generator.validate_output(&manifest.generator.output)?;
    generator.validate_type_name(&manifest.generator.base_type, "base type", None)?;

    let types = ctx.push("types");
    for (name, decl) in &manifest.types {
        types.validate_type_name(name, "type name", None)?;

        if let Some(extends) = &decl.extends {
            types.push(name).validate_type_name(
                extends.get_ref(),
                "base type",
                Some(extends.span().into()),
            )?;
        }
    }

    for (name, decl) in &manifest.types {
        if let Some(chain) = find_cycle(manifest, name) {
            let span = decl.extends.as_ref().map(|e| e.span().into());
            return Err(ctx
                .source_context()
                .inheritance_cycle_error(chain.join(" -> "), span));
        }
    }

    Ok(())
}

/// Follow `extends` from `start`; return the chain if it leads back to `start`.
fn find_cycle<'a>(manifest: &'a Manifest, start: &'a str) -> Option<Vec<&'a str>> {
    let mut chain = vec![start];
    let mut current = manifest.get_type(start)?.base();

    while let Some(base) = current {
        chain.push(base);
        if base == start {
            return Some(chain);
        }
        // A cycle that does not pass through `start` is reported from one of its members.
        if chain[..chain.len() - 1].contains(&base) {
            return None;
        }
        current = manifest.get_type(base).and_then(|decl| decl.base());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "[generator]\noutput = \"Assets/Editor/Menu.cs\"\n";

    fn parse(extra: &str) -> Result<Manifest> {
        Manifest::from_str(&format!("{}{}", HEADER, extra))
    }

    #[test]
    fn test_generator_defaults() {
        let m = parse("").unwrap();
        assert_eq!(m.generator.output, Path::new("Assets/Editor/Menu.cs"));
        assert_eq!(m.generator.order, 0);
        assert_eq!(m.generator.prefix, "");
        assert_eq!(m.generator.suffix, "");
        assert_eq!(m.generator.base_type, crate::DEFAULT_BASE_TYPE);
        assert!(m.generator.create_dirs);
        assert!(m.types.is_empty());
    }

    #[test]
    fn test_generator_settings() {
        let m = Manifest::from_str(
            r#"
            [generator]
            output = "Gen/Menu.cs"
            order = 42
            prefix = "X_"
            suffix = "_Y"
            base_type = "Game.AssetBase"
            create_dirs = false
            "#,
        )
        .unwrap();

        assert_eq!(m.generator.order, 42);
        assert_eq!(m.generator.prefix, "X_");
        assert_eq!(m.generator.suffix, "_Y");
        assert_eq!(m.generator.base_type, "Game.AssetBase");
        assert!(!m.generator.create_dirs);
    }

    #[test]
    fn test_type_defaults() {
        let m = parse(
            r#"
            [types."Game.Sword"]
            menu = {}
            "#,
        )
        .unwrap();

        let decl = m.get_type("Game.Sword").unwrap();
        assert!(decl.is_public);
        assert!(!decl.is_abstract);
        assert!(!decl.is_generic);
        assert!(decl.assembly.is_none());
        assert_eq!(decl.menu, Some(crate::MenuDecl::default()));
    }

    #[test]
    fn test_menu_metadata() {
        let m = parse(
            r#"
            [types."Game.Sword"]
            menu = { prefix = "Weapons/", suffix = " (Melee)", order = 5 }
            "#,
        )
        .unwrap();

        let menu = m.get_type("Game.Sword").unwrap().menu.clone().unwrap();
        assert_eq!(menu.prefix, "Weapons/");
        assert_eq!(menu.suffix, " (Melee)");
        assert_eq!(menu.order, Some(5));
    }

    #[test]
    fn test_missing_generator_is_parse_error() {
        let err = Manifest::from_str("[types.\"A\"]\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = parse("[types.\"A\"]\nsealed = true\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_output_is_rejected() {
        let err = Manifest::from_str("[generator]\noutput = \"\"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_invalid_type_name_is_rejected() {
        let err = parse("[types.\"Game..Sword\"]\n").unwrap_err();
        match *err {
            Error::InvalidTypeName { name, span, .. } => {
                assert_eq!(name, "Game..Sword");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_base_name_is_rejected() {
        let err = parse("[types.\"Game.Sword\"]\nextends = \"Not A Type\"\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidTypeName { .. }));
    }

    #[test]
    fn test_generic_arity_is_allowed() {
        assert!(parse("[types.\"Game.Container`1\"]\ngeneric = true\n").is_ok());
    }

    #[test]
    fn test_inheritance_cycle_is_rejected() {
        let err = parse(
            r#"
            [types."A"]
            extends = "B"

            [types."B"]
            extends = "C"

            [types."C"]
            extends = "A"
            "#,
        )
        .unwrap_err();

        match *err {
            Error::InheritanceCycle { chain, .. } => assert_eq!(chain, "A -> B -> C -> A"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_self_inheritance_is_rejected() {
        let err = parse("[types.\"A\"]\nextends = \"A\"\n").unwrap_err();
        assert!(matches!(*err, Error::InheritanceCycle { .. }));
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = Manifest::from_file("/definitely/not/here/menugen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
