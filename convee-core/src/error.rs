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

//! Error types for the lead capture flow.

use thiserror::Error;

use crate::flow::ModalState;

/// A form field that failed local validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Bitte geben Sie Ihren Namen ein.")]
    MissingName,

    #[error("Bitte geben Sie eine gültige E-Mail-Adresse ein.")]
    InvalidEmail,

    /// The message exceeds the character limit of the input control.
    #[error("Die Nachricht darf höchstens {max} Zeichen lang sein.")]
    MessageTooLong { max: usize },
}

/// A submit attempt that was rejected before any network call.
///
/// None of these change the modal state; the user fixes the input and
/// submits again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// No verification token is present.
    #[error("Bitte bestätigen Sie zuerst, dass Sie kein Roboter sind.")]
    ValidationBlocked,

    #[error(transparent)]
    InvalidForm(#[from] FormError),

    /// Submit was called while the modal was not showing the form.
    #[error("Submit is not possible while the modal is {0:?}")]
    NotAccepting(ModalState),
}

/// The webhook did not accept the submission.
///
/// Every variant is shown to the user the same way (the error screen with a
/// retry button); the detail only ends up in the logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The request never produced a response (DNS, CORS, offline, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status.
    #[error("Webhook rejected submission ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Browser storage is missing, full, or disabled.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Webhook URL is not configured")]
    MissingWebhookUrl,

    #[error("Webhook URL {url:?} is not a valid http(s) URL")]
    InvalidWebhookUrl { url: String },

    #[error("Turnstile site key is not configured")]
    MissingSiteKey,

    #[error("Could not decode runtime config: {0}")]
    Decode(String),
}
