use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationErrors};

/// Shown when the email field doesn't look like an email address.
pub const INVALID_EMAIL: &str = "Invalid email";

/// Shown when the password is too short.
pub const SHORT_PASSWORD: &str = "Password must be at least 8 characters";

/// Dot-atom local part at a dotted domain ending in a TLD of at least two
/// letters. Validator's `email` alone lets through `a..b@c.com` and IP
/// literals.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .unwrap_or_else(|err| unreachable!("email pattern is a valid regex: {err}"))
});

/// An email/password pair, as typed into a login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Credentials {
    /// Must be a syntactically valid email address with a dotted domain.
    #[validate(
        email(message = "Invalid email"),
        regex(path = *EMAIL_SHAPE, message = "Invalid email")
    )]
    pub email: String,

    /// Must be at least 8 characters long, counted as Unicode scalar values
    /// rather than UTF-16 code units. Four emoji are four characters.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl Credentials {
    /// Construct credentials from anything string-like
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check both fields, collecting a message for each one that fails.
    ///
    /// ## Errors
    ///
    /// Returns the per-field messages if either field is invalid.
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }
}

/// Per-field error messages for a login form. `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    /// What's wrong with the email field
    pub email: Option<String>,

    /// What's wrong with the password field
    pub password: Option<String>,
}

impl FieldErrors {
    /// Are there no errors at all?
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = Self::default();

        for (field, errs) in errors.field_errors() {
            let Some(first) = errs.first() else {
                continue;
            };

            let message = first
                .message
                .as_ref()
                .map_or_else(|| format!("Invalid value for {field}"), ToString::to_string);

            match field.as_ref() {
                "email" => out.email = Some(message),
                "password" => out.password = Some(message),
                _ => tracing::warn!(%field, %message, "validation error for unknown field"),
            }
        }

        out
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_good_credentials() {
        assert_eq!(Credentials::new("a@b.com", "longenough").check(), Ok(()));
    }

    #[test]
    fn short_password() {
        let errors = Credentials::new("a@b.com", "short").check().unwrap_err();

        assert_eq!(errors.email, None);
        assert_eq!(errors.password.as_deref(), Some(SHORT_PASSWORD));
    }

    #[test]
    fn bad_email() {
        let errors = Credentials::new("not an email", "longenough")
            .check()
            .unwrap_err();

        assert_eq!(errors.email.as_deref(), Some(INVALID_EMAIL));
        assert_eq!(errors.password, None);
    }

    #[test]
    fn empty_form_has_both_errors() {
        let errors = Credentials::default().check().unwrap_err();

        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            ".a@b.com",
            "a.@b.com",
            "a..b@c.com",
            "a@b",
            "user@localhost",
            "a@[127.0.0.1]",
            "a@b.c",
            "a@-b.com",
            "a@b..com",
        ] {
            let errors = Credentials::new(email, "longenough").check().unwrap_err();

            assert_eq!(
                errors.email.as_deref(),
                Some(INVALID_EMAIL),
                "{email:?} should have been rejected"
            );
        }
    }

    #[test]
    fn accepts_ordinary_emails() {
        for email in [
            "a@b.com",
            "john.doe@fcrit.ac.in",
            "first+tag@sub.example.org",
            "o'brien_1@mail-host.co",
        ] {
            assert_eq!(
                Credentials::new(email, "longenough").check(),
                Ok(()),
                "{email:?} should have been accepted"
            );
        }
    }

    #[test]
    fn every_rule_uses_the_shared_messages() {
        let errors = Credentials::new("a..b@localhost", "short")
            .validate()
            .unwrap_err();
        let field_errors = errors.field_errors();

        let email_messages: Vec<_> = field_errors["email"]
            .iter()
            .map(|err| err.message.as_deref())
            .collect();
        assert!(!email_messages.is_empty());
        assert!(
            email_messages.iter().all(|msg| *msg == Some(INVALID_EMAIL)),
            "{email_messages:?}"
        );

        let password_messages: Vec<_> = field_errors["password"]
            .iter()
            .map(|err| err.message.as_deref())
            .collect();
        assert_eq!(password_messages, vec![Some(SHORT_PASSWORD)]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(Credentials::new("a@b.com", "😀😀😀😀")
            .check()
            .unwrap_err()
            .password
            .is_some());
        assert_eq!(Credentials::new("a@b.com", "😀😀😀😀😀😀😀😀").check(), Ok(()));
    }

    #[test]
    fn exactly_eight_characters_is_enough() {
        assert_eq!(Credentials::new("a@b.com", "12345678").check(), Ok(()));
    }

    proptest! {
        #[test]
        fn short_passwords_always_fail(password in ".{0,7}") {
            let errors = Credentials::new("a@b.com", password).check().unwrap_err();

            prop_assert!(errors.password.is_some_and(|msg| !msg.is_empty()));
        }

        #[test]
        fn emails_without_at_always_fail(email in "[a-z0-9.]{0,20}") {
            let errors = Credentials::new(email, "longenough").check().unwrap_err();

            prop_assert!(errors.email.is_some_and(|msg| !msg.is_empty()));
        }

        #[test]
        fn doubled_dots_always_fail(
            before in "[a-z]{1,5}",
            after in "[a-z]{1,5}",
            domain in "[a-z]{1,10}\\.com",
        ) {
            let errors = Credentials::new(format!("{before}..{after}@{domain}"), "longenough")
                .check()
                .unwrap_err();

            prop_assert_eq!(errors.email.as_deref(), Some(INVALID_EMAIL));
        }

        #[test]
        fn dotless_domains_always_fail(user in "[a-z]{1,10}", host in "[a-z0-9]{1,10}") {
            let errors = Credentials::new(format!("{user}@{host}"), "longenough")
                .check()
                .unwrap_err();

            prop_assert_eq!(errors.email.as_deref(), Some(INVALID_EMAIL));
        }

        #[test]
        fn valid_inputs_always_pass(
            user in "[a-z][a-z0-9]{0,10}",
            domain in "[a-z]{1,10}\\.(com|org|in)",
            password in "[a-zA-Z0-9]{8,20}",
        ) {
            prop_assert_eq!(Credentials::new(format!("{user}@{domain}"), password).check(), Ok(()));
        }
    }
}
