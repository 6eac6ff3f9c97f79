//! Input normalizers.
//!
//! A normalizer turns raw user input into the canonical form the later
//! stages inspect, or returns `None` (a Format failure).

/// Separators users type between groups of characters.
const SEPARATORS: [char; 3] = [' ', '-', '.'];

fn strip_separators(raw: &str) -> String {
    raw.trim().chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Strips separators and uppercases. Accepts ASCII alphanumerics and `*`.
pub fn alphanumeric(raw: &str) -> Option<String> {
    let normalized = strip_separators(raw).to_ascii_uppercase();
    let accepted = normalized
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'*');

    (!normalized.is_empty() && accepted).then_some(normalized)
}

/// Strips separators and uppercases. Accepts ASCII alphanumerics.
///
/// Letters pass so that digit-only schemes report them at the Length or
/// Charset stage rather than as a Format failure.
pub fn numeric(raw: &str) -> Option<String> {
    let normalized = strip_separators(raw).to_ascii_uppercase();
    let accepted = normalized.bytes().all(|b| b.is_ascii_alphanumeric());

    (!normalized.is_empty() && accepted).then_some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(" 10x-at.tso 1 ", Some("10XATTSO1"))]
    #[case("ab*", Some("AB*"))]
    #[case("", None)]
    #[case(" - ", None)]
    #[case("AB#1", None)]
    #[case("ÄB1", None)]
    fn test_alphanumeric(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(alphanumeric(raw).as_deref(), expected);
    }

    #[rstest]
    #[case("4006-3813 3393.1", Some("4006381333931"))]
    #[case("12a4", Some("12A4"))]
    #[case("12*4", None)]
    #[case("12#4", None)]
    #[case("", None)]
    fn test_numeric(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(numeric(raw).as_deref(), expected);
    }
}
