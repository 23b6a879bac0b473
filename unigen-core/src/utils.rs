//! Shared utility functions for code generation.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "HelloWorld" -> "helloWorld")
///
/// Leading uppercase runs are lowered as a unit, so acronyms read naturally:
/// "HTTPRequest" becomes "httpRequest" and "IO" becomes "io".
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let chars: Vec<char> = pascal.chars().collect();

    let mut upper_run = chars.iter().take_while(|c| c.is_uppercase()).count();
    // Keep the last capital of a run when it starts the next word.
    if upper_run > 1 && upper_run < chars.len() {
        upper_run -= 1;
    }

    chars
        .iter()
        .enumerate()
        .flat_map(|(i, c)| {
            if i < upper_run.max(1) {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                vec![*c]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo-bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("Circle"), "circle");
        assert_eq!(to_camel_case("RightTriangle"), "rightTriangle");
        assert_eq!(to_camel_case("right_triangle"), "rightTriangle");
        assert_eq!(to_camel_case("circle"), "circle");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_camel_case_acronyms() {
        assert_eq!(to_camel_case("IO"), "io");
        assert_eq!(to_camel_case("HTTPRequest"), "httpRequest");
        assert_eq!(to_camel_case("X"), "x");
    }
}
