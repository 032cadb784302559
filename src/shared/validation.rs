use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating phone fields (contact form, company phones)
    /// Optional leading +, then 7-15 digits, spaces and dashes allowed between groups
    /// - Valid: "+998901234567", "90 123 45 67", "998-90-123-45-67"
    /// - Invalid: "phone", "12", "+99 89x 123"
    pub static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?\d[\d \-]{5,18}\d$").unwrap();

    /// Regex for validating username fields
    /// Must start with letter or underscore and contain only alphanumeric characters and underscores
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+998901234567"));
        assert!(PHONE_REGEX.is_match("90 123 45 67"));
        assert!(PHONE_REGEX.is_match("998-90-123-45-67"));
        assert!(PHONE_REGEX.is_match("1234567"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("phone"));
        assert!(!PHONE_REGEX.is_match("12"));
        assert!(!PHONE_REGEX.is_match("+99 89x 123"));
        assert!(!PHONE_REGEX.is_match(""));
        assert!(!PHONE_REGEX.is_match("123 45 67 ")); // trailing space
    }

    #[test]
    fn test_username_regex() {
        assert!(USERNAME_REGEX.is_match("admin"));
        assert!(USERNAME_REGEX.is_match("_editor1"));
        assert!(!USERNAME_REGEX.is_match("1admin"));
        assert!(!USERNAME_REGEX.is_match("user name"));
    }
}
