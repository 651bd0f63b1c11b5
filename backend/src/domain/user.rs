//! User record carried by the users representation.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Maximum allowed length for a login name.
pub const LOGIN_NAME_MAX: usize = 255;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The login name was empty once trimmed of whitespace.
    #[error("login name must not be empty")]
    EmptyLoginName,
    /// The login name carried leading or trailing whitespace.
    #[error("login name must not start or end with whitespace")]
    LoginNameWhitespace,
    /// The login name exceeded [`LOGIN_NAME_MAX`] characters.
    #[error("login name must be at most {max} characters")]
    LoginNameTooLong {
        /// Maximum number of characters accepted.
        max: usize,
    },
    /// The email address did not look like `local@domain`.
    #[error("email address `{email}` is not valid")]
    InvalidEmail {
        /// Rejected input.
        email: String,
    },
}

/// Unique login name identifying a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoginName(String);

impl LoginName {
    /// Validate and construct a [`LoginName`].
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::{LoginName, UserValidationError};
    ///
    /// assert!(LoginName::new("jdoe").is_ok());
    /// assert_eq!(LoginName::new("  "), Err(UserValidationError::EmptyLoginName));
    /// ```
    pub fn new(login_name: impl Into<String>) -> Result<Self, UserValidationError> {
        let login_name = login_name.into();
        if login_name.trim().is_empty() {
            return Err(UserValidationError::EmptyLoginName);
        }
        if login_name.trim() != login_name {
            return Err(UserValidationError::LoginNameWhitespace);
        }
        if login_name.chars().count() > LOGIN_NAME_MAX {
            return Err(UserValidationError::LoginNameTooLong {
                max: LOGIN_NAME_MAX,
            });
        }
        Ok(Self(login_name))
    }
}

impl AsRef<str> for LoginName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LoginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<LoginName> for String {
    fn from(value: LoginName) -> Self {
        value.0
    }
}

impl TryFrom<String> for LoginName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Structural check only; delivery is the mailer's concern.
        let pattern = r"^[^@\s]+@[^@\s]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address used for notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail { email });
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// A user account as exposed through the users API.
///
/// ## Invariants
/// - `display_name` is never blank; it falls back to the login name.
/// - `checkin_aliases` holds no blank entries and keeps insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    login_name: LoginName,
    display_name: String,
    enabled: bool,
    email: Option<EmailAddress>,
    email_me: bool,
    checkin_aliases: Vec<String>,
}

impl User {
    /// Build an enabled user with no email and no check-in aliases.
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::{LoginName, User};
    ///
    /// let user = User::new(LoginName::new("jdoe").expect("valid login name"));
    /// assert_eq!(user.display_name(), "jdoe");
    /// assert!(user.is_enabled());
    /// ```
    pub fn new(login_name: LoginName) -> Self {
        Self {
            display_name: login_name.to_string(),
            login_name,
            enabled: true,
            email: None,
            email_me: false,
            checkin_aliases: Vec::new(),
        }
    }

    /// Replace the display name. Blank names fall back to the login name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        self.display_name = if display_name.trim().is_empty() {
            self.login_name.to_string()
        } else {
            display_name
        };
        self
    }

    /// Set whether the account is enabled.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Attach a notification email address.
    #[must_use]
    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    /// Set whether the user wants email notifications.
    #[must_use]
    pub fn with_email_me(mut self, email_me: bool) -> Self {
        self.email_me = email_me;
        self
    }

    /// Replace the VCS check-in aliases, trimming entries and dropping blanks.
    #[must_use]
    pub fn with_checkin_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.checkin_aliases = aliases
            .into_iter()
            .map(|alias| alias.as_ref().trim().to_owned())
            .filter(|alias| !alias.is_empty())
            .collect();
        self
    }

    /// Unique login name.
    pub fn login_name(&self) -> &LoginName {
        &self.login_name
    }

    /// Name shown in the UI.
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Whether the account may log in.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Notification email address, if any.
    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Whether the user opted into email notifications.
    pub fn email_me(&self) -> bool {
        self.email_me
    }

    /// VCS check-in aliases matched against commit authors.
    pub fn checkin_aliases(&self) -> &[String] {
        &self.checkin_aliases
    }
}
