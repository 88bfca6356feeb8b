//! Identifier case conversion.
//!
//! Document keys are written as space-separated lowercase words
//! (`"buffer descriptor"`). Every identifier the generator synthesizes goes
//! through one of these functions, so the conversions must stay pure and
//! deterministic.

/// Upper-cases the first character of a token, leaving the rest untouched.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(token.len());
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Converts a whitespace-separated name to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    s.split_whitespace().map(capitalize).collect()
}

/// Converts a whitespace-separated name to camelCase.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(pascal.len());
            result.push(first.to_ascii_lowercase());
            result.push_str(chars.as_str());
            result
        }
        None => pascal,
    }
}

/// Converts an enum or bitmask value name to PascalCase.
///
/// Value names use hyphens as word separators (`"always-hit"`), which are
/// treated like spaces here.
#[must_use]
pub fn to_enum_value_case(s: &str) -> String {
    to_pascal_case(&s.replace('-', " "))
}

/// Converts a name to SCREAMING_SNAKE_CASE, used for constant macros.
#[must_use]
pub fn to_constant_case(s: &str) -> String {
    s.replace('-', " ")
        .split_whitespace()
        .map(str::to_ascii_uppercase)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("primary index"), "PrimaryIndex");
        assert_eq!(to_pascal_case("adapter"), "Adapter");
        assert_eq!(to_pascal_case("discrete GPU"), "DiscreteGPU");
        assert_eq!(to_pascal_case("  padded   name "), "PaddedName");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("primary index"), "primaryIndex");
        assert_eq!(to_camel_case("next in chain"), "nextInChain");
        assert_eq!(to_camel_case("x"), "x");
    }

    #[test]
    fn test_to_enum_value_case() {
        assert_eq!(to_enum_value_case("always-hit"), "AlwaysHit");
        assert_eq!(to_enum_value_case("depth32 float-stencil8"), "Depth32FloatStencil8");
        assert_eq!(to_enum_value_case("1D"), "1D");
    }

    #[test]
    fn test_to_constant_case() {
        assert_eq!(to_constant_case("whole size"), "WHOLE_SIZE");
        assert_eq!(to_constant_case("query-set index"), "QUERY_SET_INDEX");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_constant_case(""), "");
    }
}
