//! Small string helpers.

/// Uppercases the first character and leaves the rest untouched.
///
/// # Example
///
/// ```rust
/// use headline::capitalize;
///
/// assert_eq!(capitalize("h1"), "H1");
/// assert_eq!(capitalize("default"), "Default");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_ascii() {
        assert_eq!(capitalize("h6"), "H6");
        assert_eq!(capitalize("default"), "Default");
    }

    #[test]
    fn test_capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_keeps_tail() {
        assert_eq!(capitalize("hELLO"), "HELLO");
        assert_eq!(capitalize("Already"), "Already");
    }

    #[test]
    fn test_capitalize_multibyte_first_char() {
        assert_eq!(capitalize("éclair"), "Éclair");
    }
}
