//! Name helpers shared by the manifest and the generator.

/// Return the last segment of a qualified type name.
///
/// Both namespace (`.`) and nested-type (`+`) separators are honored.
pub fn simple_name(full_name: &str) -> &str {
    full_name
        .rsplit(['.', '+'])
        .next()
        .unwrap_or(full_name)
}

/// Convert a reflection-style type name to the form used in source code.
///
/// Nested types are written `Outer+Inner` by reflection but `Outer.Inner`
/// in source.
pub fn source_name(full_name: &str) -> String {
    full_name.replace('+', ".")
}

/// Check whether `segment` is a valid identifier, optionally followed by a
/// generic arity marker such as `` `1``.
pub fn is_type_segment(segment: &str) -> bool {
    let (ident, arity) = match segment.split_once('`') {
        Some((ident, arity)) => (ident, Some(arity)),
        None => (segment, None),
    };

    let mut chars = ident.chars();
    let valid_ident = match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    };

    let valid_arity = match arity {
        Some(n) => !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()),
        None => true,
    };

    valid_ident && valid_arity
}

/// Check whether `name` is a valid fully-qualified type name.
pub fn is_type_name(name: &str) -> bool {
    !name.is_empty() && name.split(['.', '+']).all(is_type_segment)
}
