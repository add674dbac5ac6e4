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

//! The lead form and the payload posted to the webhook.

use chrono::{SecondsFormat, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::FormError;
use crate::verification::VerificationToken;

/// Upper bound enforced by the message textarea (`maxlength`).
///
/// Measured like `maxlength` does, in UTF-16 code units, so an emoji
/// outside the BMP counts twice.
pub const MESSAGE_MAX_CHARS: usize = 500;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"));

/// What the visitor typed into the lead modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub name: String,
    pub email: String,
    pub website: String,
    pub message: String,
}

impl SubmissionForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.set_message(message);
        self
    }

    /// Store `message`, cutting it at [`MESSAGE_MAX_CHARS`]. Never splits
    /// a character.
    pub fn set_message(&mut self, message: &str) {
        self.message = truncate_input(message, MESSAGE_MAX_CHARS);
    }

    /// Characters left before the message limit, as the textarea counts them.
    pub fn message_chars_left(&self) -> usize {
        MESSAGE_MAX_CHARS.saturating_sub(input_len(&self.message))
    }

    /// Check required fields. Reports the first problem in field order.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        if input_len(&self.message) > MESSAGE_MAX_CHARS {
            return Err(FormError::MessageTooLong {
                max: MESSAGE_MAX_CHARS,
            });
        }
        Ok(())
    }

    /// Build the webhook payload. Does not validate.
    pub fn to_submission(
        &self,
        token: &VerificationToken,
        source: &str,
        now_ms: i64,
    ) -> LeadSubmission {
        LeadSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            website: self.website.trim().to_string(),
            message: self.message.clone(),
            captcha_token: token.as_str().to_string(),
            source: source.to_string(),
            timestamp: iso_timestamp(now_ms),
        }
    }
}

/// JSON body of the webhook POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub website: String,
    pub message: String,
    pub captcha_token: String,
    pub source: String,
    pub timestamp: String,
}

/// `2026-10-16T09:30:00.000Z`, the format `Date.prototype.toISOString` emits.
pub fn iso_timestamp(ms: i64) -> String {
    Utc.timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| ms.to_string())
}

/// Length as an HTML `maxlength` sees it.
fn input_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn truncate_input(s: &str, max: usize) -> String {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        used += ch.len_utf16();
        if used > max {
            return s[..idx].to_string();
        }
    }
    s.to_string()
}
