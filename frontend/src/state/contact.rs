use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A field verdict. The `Display` text is exactly what is shown next to the field.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactFieldError {
    #[error("Please enter your name")]
    NameMissing,
    #[error("Please enter your email")]
    EmailMissing,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please enter your message")]
    MessageMissing,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<ContactFieldError>,
    pub email: Option<ContactFieldError>,
    pub message: Option<ContactFieldError>,
}

impl ContactErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

impl ContactFields {
    pub fn validate(&self) -> ContactErrors {
        ContactErrors {
            name: validate_name(&self.name).err(),
            email: validate_email(&self.email).err(),
            message: validate_message(&self.message).err(),
        }
    }
}

pub fn validate_name(value: &str) -> Result<(), ContactFieldError> {
    if value.trim().is_empty() {
        return Err(ContactFieldError::NameMissing);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), ContactFieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactFieldError::EmailMissing);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(ContactFieldError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<(), ContactFieldError> {
    if value.trim().is_empty() {
        return Err(ContactFieldError::MessageMissing);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn missing_name_is_the_only_error() {
        let errors = form("", "a@b.com", "hi").validate();
        assert_eq!(errors.name, Some(ContactFieldError::NameMissing));
        assert_eq!(errors.name.map(|e| e.to_string()).as_deref(), Some("Please enter your name"));
        assert_eq!(errors.email, None);
        assert_eq!(errors.message, None);
        assert!(!errors.is_clean());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let errors = form("Amina", "not-an-email", "hi").validate();
        assert_eq!(errors.email, Some(ContactFieldError::EmailInvalid));
        assert_eq!(
            errors.email.map(|e| e.to_string()).as_deref(),
            Some("Please enter a valid email address")
        );
        assert!(!errors.is_clean());
    }

    #[test]
    fn complete_form_is_clean() {
        let errors = form("Amina", "a@b.com", "Hello").validate();
        assert_eq!(errors, ContactErrors::default());
        assert!(errors.is_clean());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = form("   ", " \t", "\n\n").validate();
        assert_eq!(errors.name, Some(ContactFieldError::NameMissing));
        assert_eq!(errors.email, Some(ContactFieldError::EmailMissing));
        assert_eq!(errors.message, Some(ContactFieldError::MessageMissing));
        assert_eq!(
            errors.message.map(|e| e.to_string()).as_deref(),
            Some("Please enter your message")
        );
    }

    #[test]
    fn email_pattern_edges() {
        assert_eq!(validate_email("  amina@example.org "), Ok(()));
        assert_eq!(validate_email("a@b.c.d"), Ok(()));
        assert_eq!(validate_email("a@b"), Err(ContactFieldError::EmailInvalid));
        assert_eq!(validate_email("a@@b.com"), Err(ContactFieldError::EmailInvalid));
        assert_eq!(validate_email("a b@c.com"), Err(ContactFieldError::EmailInvalid));
        assert_eq!(validate_email("@b.com"), Err(ContactFieldError::EmailInvalid));
        assert_eq!(validate_email("a@b."), Err(ContactFieldError::EmailInvalid));
    }
}
