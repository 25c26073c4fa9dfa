//! Endpoint table for the Kickbox API.

use reqwest::Method;

/// Placeholder for the API version segment.
pub const API_VERSION: &str = "API_VERSION";
/// Placeholder for a batch job identifier.
pub const JOB_ID: &str = "JOB_ID";
/// Placeholder for an email address used as a path segment.
pub const EMAIL_ADDRESS: &str = "EMAIL_ADDRESS";

/// Remote operations exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Verify,
    VerifyMultiple,
    CheckJobStatus,
    CreditBalance,
    DisposableEmailCheck,
}

/// HTTP method and path template of an operation.
///
/// Templates contain `{NAME}` placeholders that are replaced at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 5] = [
        Operation::Verify,
        Operation::VerifyMultiple,
        Operation::CheckJobStatus,
        Operation::CreditBalance,
        Operation::DisposableEmailCheck,
    ];

    /// Look up the endpoint for this operation.
    pub const fn endpoint(self) -> Endpoint {
        match self {
            Operation::Verify => Endpoint {
                method: Method::GET,
                path: "/{API_VERSION}/verify",
            },
            Operation::VerifyMultiple => Endpoint {
                method: Method::PUT,
                path: "/{API_VERSION}/verify-batch",
            },
            Operation::CheckJobStatus => Endpoint {
                method: Method::GET,
                path: "/{API_VERSION}/verify-batch/{JOB_ID}",
            },
            Operation::CreditBalance => Endpoint {
                method: Method::GET,
                path: "/{API_VERSION}/balance",
            },
            Operation::DisposableEmailCheck => Endpoint {
                method: Method::GET,
                path: "/{API_VERSION}/disposable/{EMAIL_ADDRESS}",
            },
        }
    }

    /// API version segment the service expects for this operation.
    pub const fn api_version(self) -> &'static str {
        match self {
            Operation::DisposableEmailCheck => "v1",
            _ => "v2",
        }
    }

    /// Short name used in log events.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Verify => "verify",
            Operation::VerifyMultiple => "verify_multiple",
            Operation::CheckJobStatus => "check_job_status",
            Operation::CreditBalance => "credit_balance",
            Operation::DisposableEmailCheck => "disposable",
        }
    }
}
