//! # Kickbox Client
//! Asynchronous wrapper around the Kickbox email verification HTTP API: verify single addresses, upload batches, poll batch jobs, read the credit balance and check disposable domains through [`Client`] and [`ClientBuilder`].
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Each call performs exactly one round trip; there is no retry, backoff or built-in polling loop.
//!
//! ## Errors
//! Two layers are kept apart:
//! - The returned [`Error`] covers request building ([`Error::InvalidBaseUrl`], [`Error::InvalidHeader`], [`Error::Build`]), the round trip ([`Error::Request`], [`Error::EmptyResponse`]) and decoding ([`Error::Json`]). The HTTP status code alone never produces an error.
//! - Failures reported by the service in a well-formed body are carried by the response types and read with `error()` / `check()`, which yield a [`ServiceError`].
//!
//! ## Example
//! ```no_run
//! use kickbox_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("my-api-key")?;
//!
//!     let response = client.verify("bill.lumbergh@gamil.com").await?;
//!     response.check()?;
//!     println!("{} ({})", response.result, response.reason);
//!     if let Some(suggestion) = &response.did_you_mean {
//!         println!("did you mean {suggestion}?");
//!     }
//!
//!     let balance = client.credit_balance().await?;
//!     println!("credits left: {}", balance.balance);
//!     Ok(())
//! }
//! ```

mod client;
mod endpoint;
mod error;
mod models;
mod request;
mod transport;

pub use client::{BASE_URL, Client, ClientBuilder, DEFAULT_TIMEOUT};
pub use endpoint::{Endpoint, Operation};
pub use error::{Error, ServiceError};
pub use models::{
    CheckJobStatusResponse, CreditBalanceResponse, DisposableResponse, JobProgress, JobStats,
    VerifyMultipleResponse, VerifyResponse,
};
pub use request::{CALLBACK_HEADER, FILENAME_HEADER};

/// Result type alias for Kickbox operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
