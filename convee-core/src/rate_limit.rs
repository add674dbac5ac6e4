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

//! Per-browser submission cooldown.
//!
//! One timestamp (milliseconds since the epoch, stored as a decimal string)
//! records the last submission the webhook accepted. While fewer than
//! [`WINDOW`] has elapsed since then, the lead modal shows the blocked
//! screen instead of the form.

use std::time::Duration;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Storage key of the last accepted submission.
pub const LAST_SUBMISSION_KEY: &str = "convee_last_submission";

/// Cooldown between two accepted submissions.
pub const WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone)]
pub struct RateLimit<S> {
    store: S,
    key: String,
    window_ms: i64,
}

impl<S: KeyValueStore> RateLimit<S> {
    pub fn new(store: S) -> Self {
        Self::with_window(store, LAST_SUBMISSION_KEY, WINDOW)
    }

    pub fn with_window(store: S, key: &str, window: Duration) -> Self {
        Self {
            store,
            key: key.to_string(),
            window_ms: window.as_millis() as i64,
        }
    }

    /// The recorded timestamp, if one exists and parses.
    pub fn last_submission(&self) -> Option<i64> {
        let raw = self.store.read(&self.key)?;
        match raw.trim().parse::<i64>() {
            Ok(ts) => Some(ts),
            Err(_) => {
                log::warn!("Ignoring unparseable rate limit value {raw:?}");
                None
            }
        }
    }

    /// True while `now - last_submission < window`. A timestamp in the
    /// future counts as blocked until it is a full window in the past.
    pub fn is_blocked(&self, now_ms: i64) -> bool {
        self.remaining(now_ms).is_some()
    }

    /// Time until the next submission is accepted, `None` if it already is.
    pub fn remaining(&self, now_ms: i64) -> Option<Duration> {
        let last = self.last_submission()?;
        let elapsed = now_ms.saturating_sub(last);
        if elapsed < self.window_ms {
            let left = self.window_ms.saturating_sub(elapsed);
            Some(Duration::from_millis(left.max(0) as u64))
        } else {
            None
        }
    }

    /// Overwrite the timestamp after the webhook accepted a submission.
    pub fn record(&self, now_ms: i64) -> Result<(), StorageError> {
        self.store.write(&self.key, &now_ms.to_string())
    }
}
