use super::{error, Client};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The request to create a new admin account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Req {
    /// Email to use for contact and login.
    pub email: String,

    /// Plaintext password to use for login.
    pub password: String,
}

/// Whatever the server said. We don't check its shape.
pub type Resp = Value;

/// Where the admins endpoint lives, relative to the admin base URL.
pub const PATH: &str = "admins";

/// Create an admin account.
///
/// ## Errors
///
/// Errors are the same as `client::handle_response`.
pub async fn create(client: &reqwest::Client, server: &Client, req: &Req) -> error::Result<Resp> {
    server.post_json(client, &[PATH], req).await
}
