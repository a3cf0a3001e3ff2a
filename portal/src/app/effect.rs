use super::Action;
use crate::config::Config;
use internships_core::{admins, Client};

/// Connections to external services that effects use. We keep these around to
/// have some level of connection sharing for the app as a whole.
#[derive(Debug, Clone)]
pub struct EffectContext {
    /// an HTTP client with reqwest
    http: reqwest::Client,

    /// where admin accounts get created
    admin: Client,
}

impl EffectContext {
    /// Get a new `EffectContext`
    ///
    /// ## Errors
    ///
    /// If the configured admin URL is not usable.
    pub fn new(config: &Config) -> Result<Self, Problem> {
        Ok(Self {
            http: reqwest::Client::new(),
            admin: config.admin_client()?,
        })
    }

    /// Cancel any outstanding requests, e.g. because we're shutting down.
    pub fn cancel(&self) {
        self.admin.cancellation().cancel();
    }
}

/// Things that can happen as a result of user input. Side effects!
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// Create an admin account on the server
    CreateAdmin(admins::Req),
}

impl Effect {
    /// Perform the side-effectful portions of this effect, returning the next
    /// `Action` the application needs to handle. Failures travel inside the
    /// action; the login flow decides what they mean.
    pub async fn run(self, conn: &EffectContext) -> Action {
        match self {
            Self::CreateAdmin(req) => {
                tracing::info!(email = %req.email, "creating admin");

                let result = admins::create(&conn.http, &conn.admin, &req).await;
                if let Err(err) = &result {
                    tracing::error!(?err, "could not create admin");
                }

                Action::AdminCreated(result)
            }
        }
    }
}

/// Problems that can happen while setting up the `EffectContext`.
#[derive(Debug, thiserror::Error)]
pub enum Problem {
    /// We had a problem communicating with the server, for example due to a bad
    /// URL.
    #[error("Problem communicating with the server: {0}")]
    Server(#[from] internships_core::Error),
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;
    use internships_core::Error;

    #[tokio::test]
    async fn cancelled_context_reports_back_instead_of_sending() {
        let config = Config::parse_from(["portal", "--admin-api-url", "http://127.0.0.1:9/api"]);
        let conn = EffectContext::new(&config).unwrap();
        conn.cancel();

        let action = Effect::CreateAdmin(admins::Req {
            email: "admin@example.com".to_string(),
            password: "longenough".to_string(),
        })
        .run(&conn)
        .await;

        assert!(
            matches!(action, Action::AdminCreated(Err(Error::Cancelled))),
            "{action:?}"
        );
    }

    #[test]
    fn bad_admin_url_is_a_problem() {
        let config = Config::parse_from(["portal", "--admin-api-url", "not a url"]);

        let problem = EffectContext::new(&config).unwrap_err();

        assert!(matches!(problem, Problem::Server(_)), "{problem:?}");
    }
}
