use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".+@.+\..+").unwrap());

pub const INVALID_EMAIL: &str = "Enter a valid email.";
pub const MISSING_CONSENT: &str = "Please agree to receive emails.";
pub const SUBSCRIBED: &str = "Thanks for subscribing!";

pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Feedback shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Error(String),
    Success(String),
}

impl FormMessage {
    pub fn text(&self) -> &str {
        match self {
            FormMessage::Error(text) | FormMessage::Success(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormMessage::Success(_))
    }

    /// Text color of the message
    pub fn color(&self) -> &'static str {
        match self {
            FormMessage::Error(_) => "#7f1d1d",
            FormMessage::Success(_) => "#3f6212",
        }
    }
}

impl fmt::Display for FormMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
    pub consent: bool,
}

impl NewsletterForm {
    pub fn new(email: impl Into<String>, consent: bool) -> Self {
        Self {
            email: email.into(),
            consent,
        }
    }

    /// Every problem with the current input, in display order
    pub fn errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if !validate_email(&self.email) {
            errors.push(INVALID_EMAIL);
        }
        if !self.consent {
            errors.push(MISSING_CONSENT);
        }
        errors
    }

    /// Validate; on success the form is cleared.
    pub fn submit(&mut self) -> FormMessage {
        let errors = self.errors();
        if !errors.is_empty() {
            return FormMessage::Error(errors.join(" "));
        }
        *self = Self::default();
        FormMessage::Success(SUBSCRIBED.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last@example.org"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("ab.co"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_email_is_checked_as_typed() {
        let form = NewsletterForm::new(" @x.io", true);
        assert!(form.errors().is_empty());

        let form = NewsletterForm::new("   ", true);
        assert_eq!(form.errors(), vec![INVALID_EMAIL]);
    }

    #[test]
    fn test_both_errors_in_order() {
        let mut form = NewsletterForm::new("nope", false);
        let message = form.submit();

        assert_eq!(
            message,
            FormMessage::Error("Enter a valid email. Please agree to receive emails.".to_string())
        );
        assert_eq!(message.color(), "#7f1d1d");
        assert_eq!(form.email, "nope");
    }

    #[test]
    fn test_missing_consent_only() {
        let mut form = NewsletterForm::new("a@b.co", false);
        assert_eq!(form.submit().text(), MISSING_CONSENT);
    }

    #[test]
    fn test_success_resets_form() {
        let mut form = NewsletterForm::new("  a@b.co ", true);
        let message = form.submit();

        assert!(message.is_success());
        assert_eq!(message.to_string(), "Thanks for subscribing!");
        assert_eq!(form, NewsletterForm::default());
    }
}
