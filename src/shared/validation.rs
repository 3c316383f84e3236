use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating phone numbers on mosque submissions
    /// Optional leading "+", then digits with optional spaces, dashes or parentheses
    /// - Valid: "021-3811708", "+62 21 3811708", "(021) 555 1234"
    /// - Invalid: "call me", "12", "+62-abc"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9(][0-9\s\-()]{4,30}[0-9]$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("021-3811708"));
        assert!(PHONE_REGEX.is_match("+62 21 3811708"));
        assert!(PHONE_REGEX.is_match("(021) 555 1234"));
        assert!(PHONE_REGEX.is_match("081234567890"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("call me"));
        assert!(!PHONE_REGEX.is_match("12")); // too short
        assert!(!PHONE_REGEX.is_match("+62-abc"));
        assert!(!PHONE_REGEX.is_match("")); // empty
        assert!(!PHONE_REGEX.is_match("0812-")); // trailing dash
    }
}
