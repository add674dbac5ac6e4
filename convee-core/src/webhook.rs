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

//! Outbound webhook delivery.
//!
//! Works on WASM (browser `fetch`) and natively via [`reqwest`].

use std::rc::Rc;

use reqwest::Client;

use crate::error::DeliveryError;
use crate::form::LeadSubmission;

/// The external receiver of lead submissions.
///
/// Futures are not `Send`; in the browser everything runs on one thread.
#[allow(async_fn_in_trait)]
pub trait Webhook {
    /// Send one submission. `Ok` only if the receiver accepted it.
    async fn deliver(&self, submission: &LeadSubmission) -> Result<(), DeliveryError>;
}

impl<W: Webhook + ?Sized> Webhook for Rc<W> {
    async fn deliver(&self, submission: &LeadSubmission) -> Result<(), DeliveryError> {
        (**self).deliver(submission).await
    }
}

/// POSTs submissions as JSON to a fixed URL.
///
/// Any 2xx response counts as accepted. Everything else, including a
/// transport failure, is a [`DeliveryError`]; there is no retry.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    url: String,
    http: Client,
}

impl WebhookClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim().to_string(),
            http: Client::new(),
        }
    }
}

impl Webhook for WebhookClient {
    async fn deliver(&self, submission: &LeadSubmission) -> Result<(), DeliveryError> {
        log::info!("Posting lead submission to {}", self.url);

        let response = self
            .http
            .post(&self.url)
            .json(submission)
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            log::info!("Webhook accepted submission ({status})");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Webhook rejected submission ({status}): {body}");
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
