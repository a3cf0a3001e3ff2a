use super::error::{self, Error, ErrorResp};
use super::internship::{Internship, InternshipId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::{future::Future, time::Duration};
use tokio_util::sync::CancellationToken;
use url::Url;

/// Where the backend lives if nobody says otherwise.
pub const DEFAULT_SERVER: &str = "http://localhost:8000/api";

/// The collection this client reads and writes.
pub const COLLECTION: &str = "internships";

/// Client for the internships collection. Holds no state beyond its
/// configuration, so clone it freely.
#[derive(Debug, Clone)]
pub struct Client {
    /// The base URL to connect to, including any path prefix, e.g.
    /// `http://localhost:8000/api`.
    server: Url,

    /// How long a single request may take. `None` waits forever.
    timeout: Option<Duration>,

    /// Cancelling this aborts every request made through this client (and its
    /// clones.)
    cancel: CancellationToken,
}

impl Client {
    /// Construct a new client against the given base URL.
    ///
    /// ## Errors
    ///
    /// `Error::UrlParse` if `server` is not a URL, or `Error::BaseUrl` if it
    /// can't have paths added to it.
    pub fn new(server: &str) -> error::Result<Self> {
        let server = Url::parse(server)?;

        if server.cannot_be_a_base() {
            return Err(Error::BaseUrl(server.to_string()));
        }

        Ok(Self {
            server,
            timeout: None,
            cancel: CancellationToken::new(),
        })
    }

    /// Give up on requests that take longer than `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Abort requests when `cancel` is cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// The base URL this client talks to.
    pub fn server(&self) -> &Url {
        &self.server
    }

    /// The token that cancels this client's requests.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Get every internship.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn list(&self, client: &reqwest::Client) -> error::Result<Vec<Internship>> {
        let url = self.url(&[COLLECTION])?;
        tracing::debug!(%url, "listing internships");

        self.guarded(handle_response(self.prepare(client.get(url))))
            .await
    }

    /// Create a new internship from arbitrary data.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn create<D>(&self, client: &reqwest::Client, data: &D) -> error::Result<Internship>
    where
        D: Serialize + ?Sized,
    {
        self.post_json(client, &[COLLECTION], data).await
    }

    /// Get a single internship.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`. Missing internships are
    /// `Error::Client` with a 404 status (check with `Error::is_not_found`.)
    pub async fn get_one(
        &self,
        client: &reqwest::Client,
        id: &InternshipId,
    ) -> error::Result<Internship> {
        let url = self.url(&[COLLECTION, id.as_str()])?;
        tracing::debug!(%url, "getting internship");

        self.guarded(handle_response(self.prepare(client.get(url))))
            .await
    }

    /// Replace an internship's data.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn update<D>(
        &self,
        client: &reqwest::Client,
        id: &InternshipId,
        data: &D,
    ) -> error::Result<Internship>
    where
        D: Serialize + ?Sized,
    {
        let url = self.url(&[COLLECTION, id.as_str()])?;
        tracing::debug!(%url, "updating internship");

        self.guarded(handle_response(self.prepare(client.put(url).json(data))))
            .await
    }

    /// Delete an internship. Any response body is ignored; getting `Ok(())`
    /// back means the server accepted the deletion.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn remove(&self, client: &reqwest::Client, id: &InternshipId) -> error::Result<()> {
        let url = self.url(&[COLLECTION, id.as_str()])?;
        tracing::debug!(%url, "removing internship");

        self.guarded(async {
            check_status(self.prepare(client.delete(url)).send().await?).await?;
            Ok(())
        })
        .await
    }

    /// POST some JSON to a path under the base URL.
    pub(crate) async fn post_json<D, T>(
        &self,
        client: &reqwest::Client,
        segments: &[&str],
        data: &D,
    ) -> error::Result<T>
    where
        D: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        tracing::debug!(%url, "posting");

        self.guarded(handle_response(self.prepare(client.post(url).json(data))))
            .await
    }

    /// Build a URL by adding path segments to the base URL. Segments are
    /// percent-encoded, so an ID can't escape its segment.
    fn url(&self, segments: &[&str]) -> error::Result<Url> {
        let mut url = self.server.clone();

        url.path_segments_mut()
            .map_err(|()| Error::BaseUrl(self.server.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Apply per-request settings.
    fn prepare(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.timeout {
            Some(timeout) => req.timeout(timeout),
            None => req,
        }
    }

    /// Run a request unless (or until) we're cancelled.
    async fn guarded<T>(&self, req: impl Future<Output = error::Result<T>>) -> error::Result<T> {
        tokio::select! {
            biased;

            () = self.cancel.cancelled() => Err(Error::Cancelled),
            res = req => res,
        }
    }
}

/// Convert an HTTP response into a result, interpreting errors in a
/// standard way.
///
/// ## Errors
///
/// - `Ok(..)` if the server returned a success (2xx)
/// - `Error::Client` if the server returned a client error (4xx)
/// - `Error::Server` if the server returned a server error (5xx)
/// - `Error::Unexpected` if the server returned something else (the server is
///   not supposed to issue redirects or informational responses.)
/// - `Error::Timeout` or `Error::Http` if we never got a usable response
pub async fn handle_response<T>(req: reqwest::RequestBuilder) -> error::Result<T>
where
    T: DeserializeOwned,
{
    let resp = check_status(req.send().await?).await?;

    Ok(resp.json().await?)
}

/// The status-checking half of `handle_response`, for when we don't care
/// about the body.
async fn check_status(resp: reqwest::Response) -> error::Result<reqwest::Response> {
    let status = resp.status();

    if status.is_success() {
        Ok(resp)
    } else if status.is_client_error() {
        let body = resp.text().await?;
        let message = serde_json::from_str::<ErrorResp>(&body).map_or(body, |err| err.error);

        Err(Error::Client { status, message })
    } else if status.is_server_error() {
        Err(Error::Server(status))
    } else {
        Err(Error::Unexpected(status))
    }
}
