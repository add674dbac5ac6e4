/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! `WebhookClient` against a local HTTP server.

use convee_core::rate_limit::LAST_SUBMISSION_KEY;
use convee_core::{
    DeliveryError, KeyValueStore, LeadCapture, MemoryStore, ModalState, SubmissionForm,
    SystemClock, VerificationToken, Webhook, WebhookClient,
};
use httpmock::prelude::*;
use serde_json::json;

fn submission() -> convee_core::LeadSubmission {
    SubmissionForm::new("Erika Mustermann", "erika@example.de")
        .with_message("Rückruf bitte")
        .to_submission(&VerificationToken::new("tok-123"), "convee-landing", 0)
}

#[tokio::test]
async fn posts_json_payload() {
    let server = MockServer::start_async().await;
    let hook = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/webhook/lead")
                .header("content-type", "application/json")
                .json_body(json!({
                    "name": "Erika Mustermann",
                    "email": "erika@example.de",
                    "website": "",
                    "message": "Rückruf bitte",
                    "captchaToken": "tok-123",
                    "source": "convee-landing",
                    "timestamp": "1970-01-01T00:00:00.000Z",
                }));
            then.status(200).body("Workflow was started");
        })
        .await;

    let client = WebhookClient::new(&server.url("/webhook/lead"));
    client.deliver(&submission()).await.unwrap();

    hook.assert_async().await;
}

#[tokio::test]
async fn any_2xx_is_accepted() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/hook");
            then.status(204);
        })
        .await;

    let client = WebhookClient::new(&server.url("/hook"));
    assert_eq!(client.deliver(&submission()).await, Ok(()));
}

#[tokio::test]
async fn non_2xx_is_rejected_with_status() {
    let server = MockServer::start_async().await;
    let hook = server
        .mock_async(|when, then| {
            when.method(POST).path("/hook");
            then.status(422).body("email invalid");
        })
        .await;

    let client = WebhookClient::new(&server.url("/hook"));
    let err = client.deliver(&submission()).await.unwrap_err();
    assert_eq!(
        err,
        DeliveryError::Rejected {
            status: 422,
            body: "email invalid".to_string()
        }
    );
    hook.assert_hits_async(1).await;
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let client = WebhookClient::new("http://127.0.0.1:9/hook");
    let err = client.deliver(&submission()).await.unwrap_err();
    assert!(matches!(err, DeliveryError::Network(_)), "{err:?}");
}

#[tokio::test]
async fn flow_records_cooldown_after_accepted_post() {
    let server = MockServer::start_async().await;
    let hook = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/hook")
                .json_body_partial(r#"{"captchaToken":"tok","source":"makler-kampagne"}"#);
            then.status(200);
        })
        .await;

    let store = MemoryStore::default();
    let client = WebhookClient::new(&server.url("/hook"));
    let mut capture = LeadCapture::new(store.clone(), SystemClock, "makler-kampagne");
    capture.open();

    let form = SubmissionForm::new("Erika", "erika@example.de");
    let token = Some(VerificationToken::new("tok"));
    let state = capture.submit(&client, &form, &token).await.unwrap();

    assert_eq!(state, ModalState::Success);
    assert!(store.read(LAST_SUBMISSION_KEY).is_some());
    hook.assert_hits_async(1).await;

    capture.close();
    assert_eq!(capture.open(), ModalState::Blocked);
}

#[tokio::test]
async fn flow_keeps_form_reachable_after_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/hook");
            then.status(500);
        })
        .await;

    let store = MemoryStore::default();
    let client = WebhookClient::new(&server.url("/hook"));
    let mut capture = LeadCapture::new(store.clone(), SystemClock, "convee-landing");
    capture.open();

    let form = SubmissionForm::new("Erika", "erika@example.de");
    let token = Some(VerificationToken::new("tok"));
    assert_eq!(
        capture.submit(&client, &form, &token).await,
        Ok(ModalState::Error)
    );
    assert!(store.is_empty());
    assert_eq!(capture.retry(), ModalState::Form);
}
