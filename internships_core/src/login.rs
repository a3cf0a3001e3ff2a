use crate::admins;
use crate::credentials::{Credentials, FieldErrors};
use crate::error;
use std::{fmt, mem};

/// Who a portal is for.
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Students looking for internships
    Student,

    /// Companies posting internships
    Employer,

    /// People running the whole thing
    Admin,
}

impl Role {
    /// Every role, in the order we show them.
    pub const ALL: [Role; 3] = [Role::Student, Role::Employer, Role::Admin];

    /// Heading for this role's portal
    pub fn portal_title(self) -> &'static str {
        match self {
            Self::Student => "Student Portal",
            Self::Employer => "Employer Portal",
            Self::Admin => "Admin Panel",
        }
    }

    /// Heading for this role's dashboard
    pub fn dashboard_title(self) -> &'static str {
        match self {
            Self::Student => "Student Dashboard",
            Self::Employer => "Employer Dashboard",
            Self::Admin => "Admin Dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => f.write_str("student"),
            Self::Employer => f.write_str("employer"),
            Self::Admin => f.write_str("admin"),
        }
    }
}

/// Whether a portal should show its dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Session {
    /// Showing the login form
    #[default]
    Anonymous,

    /// Showing the dashboard. There's no way back from here.
    Authenticated,
}

/// When to log in, if a successful submit also has to talk to the server.
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Log in as soon as the form validates. The server's answer is only
    /// logged, even if it's a failure.
    #[default]
    Optimistic,

    /// Wait for the server to accept the request before logging in.
    Confirmed,
}

/// What has to happen after a form validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnSuccess {
    /// Nothing; valid credentials are accepted as-is.
    Nothing,

    /// Create an admin account with the submitted credentials.
    CreateAdmin(TransitionPolicy),
}

impl OnSuccess {
    /// The side effect each portal uses. Only admins talk to the server.
    pub fn for_role(role: Role, policy: TransitionPolicy) -> Self {
        match role {
            Role::Admin => Self::CreateAdmin(policy),
            Role::Student | Role::Employer => Self::Nothing,
        }
    }
}

/// The two fields on a login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The email address
    Email,

    /// The password
    Password,
}

/// What happened when the form was submitted.
#[derive(Debug, PartialEq, Eq)]
pub enum Submitted {
    /// The form didn't validate. Errors are on the flow.
    Invalid,

    /// We're logged in and there's nothing else to do.
    LoggedIn,

    /// Send this request to the server, then hand the result to
    /// `LoginFlow::confirm`.
    CreateAdmin(admins::Req),

    /// Nothing happened, since we're already logged in or waiting on the
    /// server.
    Ignored,
}

/// A login form gating a dashboard. Every portal uses one of these, differing
/// only in role and what happens after a successful submit.
#[derive(Debug, Clone)]
pub struct LoginFlow {
    /// Whose portal this is
    role: Role,

    /// What to do once the form validates
    on_success: OnSuccess,

    /// What's been typed so far
    credentials: Credentials,

    /// Messages to show next to each field
    errors: FieldErrors,

    /// Have we tried to submit yet? Errors only show up after the first try,
    /// and then update on every edit.
    attempted: bool,

    /// Are we waiting on the server to confirm the login?
    pending: bool,

    /// A form-level message, e.g. if the server refused a confirmed login
    notice: Option<String>,

    /// Where we are in the login lifecycle
    session: Session,
}

impl LoginFlow {
    /// Start a fresh, anonymous flow.
    pub fn new(role: Role, on_success: OnSuccess) -> Self {
        Self {
            role,
            on_success,
            credentials: Credentials::default(),
            errors: FieldErrors::default(),
            attempted: false,
            pending: false,
            notice: None,
            session: Session::Anonymous,
        }
    }

    /// Whose portal this is
    pub fn role(&self) -> Role {
        self.role
    }

    /// Where we are in the login lifecycle
    pub fn session(&self) -> Session {
        self.session
    }

    /// Convenience for checking the session
    pub fn is_authenticated(&self) -> bool {
        self.session == Session::Authenticated
    }

    /// Are we waiting on the server?
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// What's been typed so far
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Per-field error messages
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Any form-level message
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.credentials.email = value,
            Field::Password => self.credentials.password = value,
        }

        if self.attempted {
            self.errors = self.credentials.check().err().unwrap_or_default();
        }
    }

    /// Validate the form and, if it's good, move towards logging in.
    pub fn submit(&mut self) -> Submitted {
        if self.is_authenticated() || self.pending {
            return Submitted::Ignored;
        }

        self.attempted = true;
        self.notice = None;

        if let Err(errors) = self.credentials.check() {
            tracing::debug!(role = %self.role, ?errors, "login form did not validate");
            self.errors = errors;
            return Submitted::Invalid;
        }

        self.errors = FieldErrors::default();

        match self.on_success {
            OnSuccess::Nothing => {
                self.authenticate();
                Submitted::LoggedIn
            }
            OnSuccess::CreateAdmin(TransitionPolicy::Optimistic) => {
                let req = self.take_request();
                self.authenticate();
                Submitted::CreateAdmin(req)
            }
            OnSuccess::CreateAdmin(TransitionPolicy::Confirmed) => {
                self.pending = true;
                Submitted::CreateAdmin(admins::Req {
                    email: self.credentials.email.clone(),
                    password: self.credentials.password.clone(),
                })
            }
        }
    }

    /// Handle the server's answer to a `Submitted::CreateAdmin`.
    pub fn confirm(&mut self, result: &error::Result<admins::Resp>) {
        match result {
            Ok(resp) => tracing::info!(role = %self.role, ?resp, "created admin"),
            Err(err) => tracing::error!(role = %self.role, ?err, "error creating admin"),
        }

        if !self.pending {
            return;
        }

        self.pending = false;

        match result {
            Ok(_) => {
                self.credentials = Credentials::default();
                self.authenticate();
            }
            Err(err) => self.notice = Some(format!("Could not log in: {err}")),
        }
    }

    /// Move to the dashboard.
    fn authenticate(&mut self) {
        tracing::info!(role = %self.role, "logged in");
        self.session = Session::Authenticated;
    }

    /// Take the credentials out of the form as a request body.
    fn take_request(&mut self) -> admins::Req {
        let Credentials { email, password } = mem::take(&mut self.credentials);

        admins::Req { email, password }
    }
}
