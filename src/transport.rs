//! Executes built requests and decodes their bodies.

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::endpoint::Operation;
use crate::{Error, Result};

/// Status line and full body of a response.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Send `request` and read the whole body.
///
/// The status code is returned as-is; the service reports failures in the
/// body, so a 4xx with a JSON payload is a normal outcome here.
pub(crate) async fn invoke(
    http: &reqwest::Client,
    operation: Operation,
    request: reqwest::Request,
) -> Result<RawResponse> {
    tracing::debug!(
        operation = operation.name(),
        method = %request.method(),
        path = request.url().path(),
        "sending request"
    );

    // reqwest errors embed the request URL, which carries the API key.
    let response = http.execute(request).await.map_err(|err| {
        let err = err.without_url();
        tracing::warn!(operation = operation.name(), error = %err, "request failed");
        Error::Request(err)
    })?;
    let status = response.status();

    // `bytes` consumes the response, releasing the connection on both paths.
    let body = response.bytes().await.map_err(|err| {
        let err = err.without_url();
        tracing::warn!(operation = operation.name(), %status, error = %err, "failed to read body");
        Error::Request(err)
    })?;

    tracing::debug!(
        operation = operation.name(),
        %status,
        len = body.len(),
        "received response"
    );

    if body.is_empty() {
        tracing::warn!(operation = operation.name(), %status, "empty response body");
        return Err(Error::EmptyResponse);
    }

    Ok(RawResponse { status, body })
}

/// Decode a response body into `T` without looking at the status code.
pub(crate) fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<T> {
    Ok(serde_json::from_slice(&response.body)?)
}
