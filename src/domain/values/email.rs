//! 이메일 값 객체

use std::fmt;
use validator::ValidateEmail;

use crate::domain::errors::ValidationError;
use crate::utils::string_utils::is_blank;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if is_blank(&raw) {
            return Err(ValidationError::new("email", "이메일이 입력되지 않았습니다."));
        }
        if !raw.validate_email() {
            return Err(ValidationError::new(
                "email",
                format!("{}은 유효하지 않은 이메일 형식입니다.", raw),
            ));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_round_trips() {
        let email = Email::new("brown@woowa.com").unwrap();
        assert_eq!(email.as_str(), "brown@woowa.com");
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        assert_eq!(Email::new("").unwrap_err().field, "email");
        assert!(Email::new("brown").is_err());
        assert!(Email::new("brown@").is_err());
    }
}
