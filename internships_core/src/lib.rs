//! Common code for the internship portals: the REST client for the
//! internships collection and the login flow shared by every portal.

/// Things that can go wrong talking to the backend
pub mod error;
pub use error::Error;

/// Client for the internships collection
pub mod client;
pub use client::Client;

/// Create an admin account on the server
pub mod admins;

/// Opaque internship records and their identifiers
pub mod internship;
pub use internship::{Internship, InternshipId};

/// Email/password pairs and their validation rules
pub mod credentials;
pub use credentials::{Credentials, FieldErrors};

/// The login flow shared by all portals
pub mod login;
pub use login::{LoginFlow, OnSuccess, Role, Session, TransitionPolicy};
