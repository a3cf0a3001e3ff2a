use clap::Parser;
use internships_core::{client, Client, TransitionPolicy};
use std::{path::PathBuf, time::Duration};

/// Student, employer, and admin portals for managing internships
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Base URL of the internships API. The dashboards are placeholders, so
    /// this is only used as the fallback for `--admin-api-url`.
    #[clap(long, env = "INTERNSHIPS_API_URL", default_value = client::DEFAULT_SERVER)]
    pub api_url: String,

    /// Base URL for creating admin accounts. Uses `--api-url` if unset.
    #[clap(long, env = "ADMIN_API_URL")]
    pub admin_api_url: Option<String>,

    /// Give up on requests after this many seconds
    #[clap(long, env = "REQUEST_TIMEOUT", default_value = "30", value_parser = duration_parser)]
    pub request_timeout: Duration,

    /// Only log admins in once the server has accepted their account. By
    /// default we log in right away and only log server failures.
    #[clap(long)]
    pub confirm_admin: bool,

    /// Where should we write logs?
    #[clap(long)]
    data_dir: Option<PathBuf>,
}

/// Parse a number of seconds
fn duration_parser(s: &str) -> Result<Duration, std::num::ParseIntError> {
    s.parse().map(Duration::from_secs)
}

impl Config {
    /// Get either the configured or a default data directory. If no data
    /// directory can be found (e.g. because `$HOME` is unset) we will use the
    /// current directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("in", "internships", "portal")
                    .map(|dirs| dirs.data_local_dir().to_owned())
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// How the admin portal should treat the account-creation call
    pub fn admin_policy(&self) -> TransitionPolicy {
        if self.confirm_admin {
            TransitionPolicy::Confirmed
        } else {
            TransitionPolicy::Optimistic
        }
    }

    /// A client for creating admin accounts
    ///
    /// ## Errors
    ///
    /// If the URL is bad
    pub fn admin_client(&self) -> internships_core::error::Result<Client> {
        let server = self.admin_api_url.as_deref().unwrap_or(&self.api_url);

        Ok(Client::new(server)?.with_timeout(self.request_timeout))
    }
}
