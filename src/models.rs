//! Response types returned by the Kickbox API.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ServiceError;

/// Decode JSON `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result of verifying a single address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyResponse {
    /// `deliverable`, `undeliverable`, `risky` or `unknown`.
    #[serde(deserialize_with = "null_as_default")]
    pub result: String,
    /// Why the address got its result, e.g. `rejected_email`.
    #[serde(deserialize_with = "null_as_default")]
    pub reason: String,
    /// Role address such as `postmaster@`.
    #[serde(deserialize_with = "null_as_default")]
    pub role: bool,
    /// Free email provider such as Gmail.
    #[serde(deserialize_with = "null_as_default")]
    pub free: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disposable: bool,
    /// The domain accepts mail for any user.
    #[serde(deserialize_with = "null_as_default")]
    pub accept_all: bool,
    /// Suggested correction for a likely typo.
    pub did_you_mean: Option<String>,
    /// Quality score between 0 and 1.
    #[serde(deserialize_with = "null_as_default")]
    pub sendex: f64,
    /// Normalized address.
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    pub message: Option<String>,
}

impl VerifyResponse {
    /// Whether the address was judged deliverable.
    pub fn is_valid(&self) -> bool {
        self.result == "deliverable"
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The failure reported by the service, if the call did not succeed.
    pub fn error(&self) -> Option<ServiceError> {
        ServiceError::from_envelope(self.success, self.message.as_deref())
    }

    /// Like [`error`](Self::error) but usable with `?`.
    pub fn check(&self) -> Result<(), ServiceError> {
        self.error().map_or(Ok(()), Err)
    }
}

/// Acknowledgement of a batch upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyMultipleResponse {
    /// Job identifier to poll with
    /// [`Client::check_job_status`](crate::Client::check_job_status).
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    pub message: Option<String>,
}

impl VerifyMultipleResponse {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The failure reported by the service, if the upload was rejected.
    pub fn error(&self) -> Option<ServiceError> {
        ServiceError::from_envelope(self.success, self.message.as_deref())
    }

    pub fn check(&self) -> Result<(), ServiceError> {
        self.error().map_or(Ok(()), Err)
    }
}

/// Counters reported while a batch job is processing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobProgress {
    #[serde(deserialize_with = "null_as_default")]
    pub deliverable: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub undeliverable: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub risky: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub unknown: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub unprocessed: u64,
}

/// Final statistics of a completed batch job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobStats {
    #[serde(deserialize_with = "null_as_default")]
    pub deliverable: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub undeliverable: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub risky: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub unknown: u64,
    /// Average sendex score over the batch.
    #[serde(deserialize_with = "null_as_default")]
    pub sendex: f64,
    /// Number of addresses in the batch.
    #[serde(deserialize_with = "null_as_default")]
    pub addresses: u64,
}

/// State of a batch verification job.
///
/// `progress` is only meaningful while the job is processing and `stats`
/// once it has completed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckJobStatusResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Where the results can be fetched once the job is completed.
    #[serde(deserialize_with = "null_as_default")]
    pub download_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    /// `starting`, `processing`, `completed` or `failed`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub progress: JobProgress,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: JobStats,
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    /// Processing time in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub duration: u64,
}

impl CheckJobStatusResponse {
    pub fn is_starting(&self) -> bool {
        self.status == "starting"
    }

    pub fn is_processing(&self) -> bool {
        self.status == "processing"
    }

    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}

/// Remaining verification credits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditBalanceResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub balance: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    pub message: Option<String>,
}

impl CreditBalanceResponse {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The failure reported by the service, if the balance could not be read.
    pub fn error(&self) -> Option<ServiceError> {
        ServiceError::from_envelope(self.success, self.message.as_deref())
    }

    pub fn check(&self) -> Result<(), ServiceError> {
        self.error().map_or(Ok(()), Err)
    }
}

/// Whether an address belongs to a disposable email provider.
///
/// This endpoint has no `success`/`message` envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisposableResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub disposable: bool,
}
