//! Drives the client against a local mock of the Kickbox API.

use std::time::Duration;

use httpmock::prelude::*;
use kickbox_client::{Client, Error, ServiceError};

const API_KEY: &str = "a_valid_api_key";

const VERIFY_DELIVERABLE: &str = r#"{
    "result":"deliverable",
    "reason":"",
    "role":false,
    "free":false,
    "disposable":false,
    "accept_all":false,
    "did_you_mean":"bill.lumbergh@gmail.com",
    "sendex":0.23,
    "email":"bill.lumbergh@gamil.com",
    "user":"bill.lumbergh",
    "domain":"gamil.com",
    "success":true,
    "message":null
}"#;

const VERIFY_UNDELIVERABLE: &str = r#"{
    "result":"undeliverable",
    "reason":"rejected_email",
    "role":false,
    "free":false,
    "disposable":false,
    "accept_all":false,
    "did_you_mean":"bill.lumbergh@gmail.com",
    "sendex":0.23,
    "email":"bill.lumbergh@gamil.com",
    "user":"bill.lumbergh",
    "domain":"gamil.com",
    "success":true,
    "message":null
}"#;

const BAD_REQUEST: &str = r#"{
    "message": "An error message describing the problem",
    "success": false
}"#;

const BATCH_ACCEPTED: &str = r#"{"id":123,"success":true,"message":null}"#;

const JOB_STARTING: &str = r#"{"id": 465, "status": "starting", "success": true, "message": null}"#;

const JOB_PROCESSING: &str = r#"{
    "id": 465,
    "status":"processing",
    "progress":{
        "deliverable": 0,
        "undeliverable": 0,
        "risky": 0,
        "unknown": 0,
        "total": 0,
        "unprocessed": 2
    },
    "success": true,
    "message": null
}"#;

const JOB_COMPLETED: &str = r#"{
    "id": 465,
    "name": "Batch API Process - 05-12-2015-01-58-08",
    "download_url": "https://example.com/results.csv",
    "created_at": "2015-05-12T18:58:08.000Z",
    "status": "completed",
    "stats": {
        "deliverable": 1,
        "undeliverable": 1,
        "risky": 0,
        "unknown": 0,
        "sendex": 0.35,
        "addresses": 2
    },
    "error": null,
    "duration": 0,
    "success": true,
    "message": null
}"#;

const BALANCE_OK: &str = r#"{"balance": 1337, "success": true, "message": null}"#;

const BALANCE_FAILED: &str =
    r#"{"balance": 0, "success": false, "message": "Error retrieving your balance"}"#;

const BATCH_CSV: &[u8] = br#""test@test.com","Foo Bar""#;

fn client(server: &MockServer) -> Client {
    Client::builder(API_KEY)
        .base_url(server.base_url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn verify_deliverable_address() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/verify")
                .query_param("apikey", API_KEY)
                .query_param("email", "a_valid@email.com");
            then.status(200)
                .header("content-type", "application/json")
                .body(VERIFY_DELIVERABLE);
        })
        .await;

    let response = client(&server).verify("a_valid@email.com").await.unwrap();

    mock.assert_async().await;
    assert!(response.is_valid());
    assert_eq!(response.error(), None);
    assert_eq!(response.user, "bill.lumbergh");
}

#[tokio::test]
async fn verify_undeliverable_address() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/verify");
            then.status(200).body(VERIFY_UNDELIVERABLE);
        })
        .await;

    let response = client(&server).verify("a_valid@email.com").await.unwrap();

    assert!(!response.is_valid());
    assert_eq!(response.reason, "rejected_email");
    assert!(response.check().is_ok());
}

#[tokio::test]
async fn verify_bad_request_is_decoded() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/verify");
            then.status(400).body(BAD_REQUEST);
        })
        .await;

    let response = client(&server).verify("a_valid@email.com").await.unwrap();

    assert!(!response.is_valid());
    assert_eq!(
        response.error(),
        Some(ServiceError::Message(
            "An error message describing the problem".to_string()
        ))
    );
}

#[tokio::test]
async fn verify_multiple_uploads_body_and_headers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/v2/verify-batch")
                .query_param("apikey", API_KEY)
                .header("x-kickbox-callback", "http://callback.com")
                .header("x-kickbox-filename", "filename.txt")
                .body(r#""test@test.com","Foo Bar""#);
            then.status(200).body(BATCH_ACCEPTED);
        })
        .await;

    let response = client(&server)
        .verify_multiple(Some("http://callback.com"), Some("filename.txt"), BATCH_CSV)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.id, 123);
    assert!(response.check().is_ok());
}

#[tokio::test]
async fn verify_multiple_bad_request_is_decoded() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/v2/verify-batch");
            then.status(400).body(BAD_REQUEST);
        })
        .await;

    let response = client(&server)
        .verify_multiple(None, None, BATCH_CSV)
        .await
        .unwrap();

    assert!(response.error().is_some());
}

#[tokio::test]
async fn check_job_status_reports_each_state() {
    for (body, expected) in [
        (JOB_STARTING, [true, false, false]),
        (JOB_PROCESSING, [false, true, false]),
        (JOB_COMPLETED, [false, false, true]),
    ] {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/verify-batch/415")
                    .query_param("apikey", API_KEY);
                then.status(200).body(body);
            })
            .await;

        let response = client(&server).check_job_status(415).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.id, 465);
        assert_eq!(
            [
                response.is_starting(),
                response.is_processing(),
                response.is_completed()
            ],
            expected
        );
    }
}

#[tokio::test]
async fn credit_balance_ok() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/balance")
                .query_param("apikey", API_KEY);
            then.status(200).body(BALANCE_OK);
        })
        .await;

    let response = client(&server).credit_balance().await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.balance, 1337);
    assert_eq!(response.error(), None);
}

#[tokio::test]
async fn credit_balance_failure_is_in_result() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/balance");
            then.status(200).body(BALANCE_FAILED);
        })
        .await;

    let response = client(&server).credit_balance().await.unwrap();

    assert_eq!(
        response.check(),
        Err(ServiceError::Message(
            "Error retrieving your balance".to_string()
        ))
    );
}

#[tokio::test]
async fn disposable_uses_v1_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/disposable/email%40address.com")
                .query_param("apikey", API_KEY);
            then.status(200).body(r#"{"disposable": true}"#);
        })
        .await;

    let response = client(&server).disposable("email@address.com").await.unwrap();

    mock.assert_async().await;
    assert!(response.disposable);
}

#[tokio::test]
async fn empty_body_is_an_error_for_every_operation() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.query_param("apikey", API_KEY);
            then.status(200);
        })
        .await;
    let client = client(&server);

    assert!(matches!(
        client.verify("a@b.com").await,
        Err(Error::EmptyResponse)
    ));
    assert!(matches!(
        client.verify_multiple(None, None, BATCH_CSV).await,
        Err(Error::EmptyResponse)
    ));
    assert!(matches!(
        client.check_job_status(1).await,
        Err(Error::EmptyResponse)
    ));
    assert!(matches!(
        client.credit_balance().await,
        Err(Error::EmptyResponse)
    ));
    assert!(matches!(
        client.disposable("a@b.com").await,
        Err(Error::EmptyResponse)
    ));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/balance");
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;

    let err = client(&server).credit_balance().await.unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn timeout_is_a_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/balance");
            then.status(200)
                .body(BALANCE_OK)
                .delay(Duration::from_millis(500));
        })
        .await;
    let client = Client::builder(API_KEY)
        .base_url(server.base_url())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.credit_balance().await.unwrap_err();

    assert!(matches!(err, Error::Request(ref e) if e.is_timeout()));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let client = Client::builder(API_KEY)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.credit_balance().await.unwrap_err();

    assert!(matches!(err, Error::Request(_)));
}

#[tokio::test]
async fn transport_error_does_not_expose_api_key() {
    let client = Client::builder("TOPSECRETKEY")
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.verify("a@b.com").await.unwrap_err();

    assert!(matches!(err, Error::Request(_)));
    assert!(!err.to_string().contains("TOPSECRETKEY"), "{err}");
    assert!(!format!("{err:?}").contains("TOPSECRETKEY"), "{err:?}");
}

#[tokio::test]
async fn supplied_http_client_is_used_for_calls() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/balance")
                .header("user-agent", "kickbox-tests/1.0");
            then.status(200).body(BALANCE_OK);
        })
        .await;
    let http = reqwest::Client::builder()
        .user_agent("kickbox-tests/1.0")
        .build()
        .unwrap();
    let client = Client::builder(API_KEY)
        .base_url(server.base_url())
        .http_client(http)
        .build()
        .unwrap();

    client.credit_balance().await.unwrap();

    mock.assert_async().await;
}
