//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation, as used by the Unity C# template.
    pub const CSHARP: Self = Self::Tab;

    /// Append one indent level to `buf`.
    pub fn push_to(&self, buf: &mut String) {
        match self {
            Self::Spaces(width) => buf.extend(std::iter::repeat_n(' ', usize::from(*width))),
            Self::Tab => buf.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(indent: Indent) -> String {
        let mut buf = String::new();
        indent.push_to(&mut buf);
        buf
    }

    #[test]
    fn test_push_to() {
        assert_eq!(rendered(Indent::Spaces(2)), "  ");
        assert_eq!(rendered(Indent::Spaces(3)), "   ");
        assert_eq!(rendered(Indent::Spaces(0)), "");
        assert_eq!(rendered(Indent::Tab), "\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Tab);
    }
}
