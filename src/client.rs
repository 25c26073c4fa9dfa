//! Kickbox async client implementation.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::endpoint::{EMAIL_ADDRESS, JOB_ID, Operation};
use crate::request::{self, CALLBACK_HEADER, FILENAME_HEADER, RequestParts};
use crate::transport;
use crate::{
    CheckJobStatusResponse, CreditBalanceResponse, DisposableResponse, Error, Result,
    VerifyMultipleResponse, VerifyResponse,
};

/// Production endpoint of the Kickbox API.
pub const BASE_URL: &str = "https://api.kickbox.com";

/// Timeout applied when the client builds its own HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Async client for the Kickbox email verification API.
///
/// The client is cheap to clone and holds no per-call state, so one instance
/// can serve concurrent tasks. Use [`Client::new`] for defaults or
/// [`Client::builder`] to override the base URL, timeout or HTTP client.
///
/// Every call returns `Err` only when the request could not be built, the
/// round trip failed, or the body could not be decoded. Failures reported by
/// the service itself (bad API key, no credits left) come back as `Ok` and
/// are read from the response, e.g. [`VerifyResponse::error`].
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a client for the production API with a 2 second timeout.
    ///
    /// # Examples
    /// ```no_run
    /// # use kickbox_client::Client;
    /// # fn main() -> Result<(), kickbox_client::Error> {
    /// let client = Client::new("my-api-key")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Verify a single email address.
    ///
    /// # Examples
    /// ```no_run
    /// # use kickbox_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("my-api-key")?;
    /// let response = client.verify("bill.lumbergh@gamil.com").await?;
    /// response.check()?;
    /// if !response.is_valid() {
    ///     println!("{}: {}", response.result, response.reason);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn verify(&self, email: &str) -> Result<VerifyResponse> {
        let mut parts = RequestParts::for_operation(Operation::Verify);
        parts.param("email", email);
        self.call(Operation::Verify, parts).await
    }

    /// Upload a batch of addresses for asynchronous verification.
    ///
    /// `data` is sent verbatim and is expected to hold CSV rows of
    /// `"email","name"`. `callback_url` and `filename` are forwarded as the
    /// `X-Kickbox-Callback` and `X-Kickbox-Filename` headers when non-empty.
    /// Poll the returned job id with [`Client::check_job_status`].
    pub async fn verify_multiple(
        &self,
        callback_url: Option<&str>,
        filename: Option<&str>,
        data: impl Into<Vec<u8>>,
    ) -> Result<VerifyMultipleResponse> {
        let mut parts = RequestParts::for_operation(Operation::VerifyMultiple);
        parts
            .optional_header(CALLBACK_HEADER, callback_url)?
            .optional_header(FILENAME_HEADER, filename)?
            .body(data.into());
        self.call(Operation::VerifyMultiple, parts).await
    }

    /// Fetch the state of a batch job.
    ///
    /// # Examples
    /// ```no_run
    /// # use kickbox_client::Client;
    /// # use std::time::Duration;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("my-api-key")?;
    /// let job = client.verify_multiple(None, Some("list.csv"), "\"a@b.com\",\"A\"").await?;
    /// job.check()?;
    /// loop {
    ///     let status = client.check_job_status(job.id).await?;
    ///     if status.is_completed() {
    ///         println!("{}", status.download_url);
    ///         break;
    ///     }
    ///     tokio::time::sleep(Duration::from_secs(5)).await;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn check_job_status(&self, job_id: u64) -> Result<CheckJobStatusResponse> {
        let mut parts = RequestParts::for_operation(Operation::CheckJobStatus);
        parts.segment(JOB_ID, job_id.to_string());
        self.call(Operation::CheckJobStatus, parts).await
    }

    /// Fetch the remaining verification credits.
    pub async fn credit_balance(&self) -> Result<CreditBalanceResponse> {
        let parts = RequestParts::for_operation(Operation::CreditBalance);
        self.call(Operation::CreditBalance, parts).await
    }

    /// Check whether an address or domain belongs to a disposable provider.
    ///
    /// The address is percent-encoded before it is placed in the path.
    pub async fn disposable(&self, email: &str) -> Result<DisposableResponse> {
        let mut parts = RequestParts::for_operation(Operation::DisposableEmailCheck);
        parts.segment(EMAIL_ADDRESS, request::path_segment(email));
        self.call(Operation::DisposableEmailCheck, parts).await
    }

    /// Build, send and decode one request.
    async fn call<T: DeserializeOwned>(&self, operation: Operation, parts: RequestParts) -> Result<T> {
        let request =
            request::build_request(&self.http, &self.base_url, &self.api_key, operation, parts)?;
        let raw = transport::invoke(&self.http, operation, request).await?;
        if !raw.status.is_success() {
            tracing::debug!(
                operation = operation.name(),
                status = %raw.status,
                "non-success status, decoding error body"
            );
        }
        transport::decode(&raw)
    }
}

/// Builder for configuring a Kickbox client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    proxy: Option<String>,
    user_agent: Option<String>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Production base URL ([`BASE_URL`])
    /// - 2 second timeout
    /// - No proxy
    /// - reqwest's default user agent
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            user_agent: None,
            http: None,
        }
    }

    /// Override the base URL, e.g. to point at a local test server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout of the built-in HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:9050").
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the user agent of the built-in HTTP client.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a pre-built HTTP client.
    ///
    /// Timeout, proxy and user agent settings on this builder are ignored
    /// when a client is supplied.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    ///
    /// Fails if the base URL cannot be parsed or the HTTP client cannot be
    /// constructed (for example, an invalid proxy URL).
    pub fn build(self) -> Result<Client> {
        url::Url::parse(&self.base_url)?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder().timeout(self.timeout);
                if let Some(proxy_url) = &self.proxy {
                    builder = builder.proxy(reqwest::Proxy::all(proxy_url).map_err(Error::Build)?);
                }
                if let Some(user_agent) = &self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder.build().map_err(Error::Build)?
            }
        };

        Ok(Client {
            http,
            api_key: self.api_key,
            base_url: self.base_url,
        })
    }
}
