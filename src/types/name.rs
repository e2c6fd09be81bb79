/// Checks whether `input` is a valid GraphQL name, matching
/// `/^[_a-zA-Z][_a-zA-Z0-9]*$/`.
pub(crate) fn is_valid_name(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Checks whether `input` starts with `__`, the prefix reserved for
/// introspection.
pub(crate) fn is_reserved_name(input: &str) -> bool {
    input.starts_with("__")
}

#[cfg(test)]
mod tests {
    use super::{is_reserved_name, is_valid_name};

    #[test]
    fn name_is_valid() {
        assert!(is_valid_name("Foo"));
        assert!(is_valid_name("foo42"));
        assert!(is_valid_name("_Foo"));
        assert!(is_valid_name("_Foo42"));
        assert!(is_valid_name("_foo42"));
        assert!(is_valid_name("_42Foo"));

        assert!(!is_valid_name("42_Foo"));
        assert!(!is_valid_name("Foo-42"));
        assert!(!is_valid_name("Foo???"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Fö"));
    }

    #[test]
    fn name_is_reserved() {
        assert!(is_reserved_name("__Type"));
        assert!(!is_reserved_name("_Type"));
    }
}
