/// Returns the longest prefix of `text` that fits in `cap` bytes without
/// splitting a UTF-8 character.
pub fn truncate_to_cap(text: &str, cap: usize) -> &str {
    if text.len() <= cap {
        return text;
    }

    let mut end = cap;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

pub trait BoundedStrExt {
    fn bounded(&self, cap: usize) -> &str;

    fn to_bounded(&self, cap: usize) -> String {
        self.bounded(cap).to_string()
    }
}

impl BoundedStrExt for str {
    fn bounded(&self, cap: usize) -> &str {
        truncate_to_cap(self, cap)
    }
}

impl BoundedStrExt for String {
    fn bounded(&self, cap: usize) -> &str {
        truncate_to_cap(self, cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("abc", 5, "abc")]
    #[case("abcdef", 3, "abc")]
    #[case("abc", 3, "abc")]
    #[case("", 0, "")]
    #[case("abc", 0, "")]
    fn truncates_ascii_to_cap(#[case] input: &str, #[case] cap: usize, #[case] expected: &str) {
        assert_eq!(input.bounded(cap), expected);
    }

    #[test]
    fn never_splits_a_multibyte_character() {
        // "é" is two bytes, so a cap of 2 only fits the leading "a"
        assert_eq!("aé".bounded(2), "a");
        assert_eq!("aé".bounded(3), "aé");
        assert_eq!("🚀".bounded(3), "");
    }

    #[test]
    fn owned_copy_matches_borrowed_prefix() {
        let long = "x".repeat(100);
        assert_eq!(long.to_bounded(63).len(), 63);
    }
}
