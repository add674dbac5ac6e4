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

//! The lead modal as an explicit state machine.
//!
//! ```text
//!   Closed ──open──► Form ──begin──► Loading ──resolve(ok)──► Success
//!     │                ▲                │
//!     │                └──retry── Error ◄┘ resolve(err)
//!     │
//!     └──open (cooldown active)──► Blocked
//!
//!   close: any state ─► Closed
//! ```
//!
//! Submitting is split in two so the UI can drop its borrow of the
//! controller while the request is in flight: [`LeadCapture::begin`]
//! validates and moves to `Loading`, the caller delivers the payload, and
//! [`LeadCapture::resolve`] applies the outcome. [`LeadCapture::submit`]
//! does all three for callers that can hold `&mut self` across the await.

use std::time::Duration;

use crate::clock::Clock;
use crate::error::{DeliveryError, SubmitError};
use crate::form::{LeadSubmission, SubmissionForm};
use crate::rate_limit::RateLimit;
use crate::storage::KeyValueStore;
use crate::verification::Verifier;
use crate::webhook::Webhook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// Modal not shown.
    Closed,
    /// Editable form.
    Form,
    /// Request in flight; re-submission disabled.
    Loading,
    Success,
    /// Delivery failed; retry returns to the form.
    Error,
    /// A submission was accepted less than 24h ago. Only close is possible.
    Blocked,
}

pub struct LeadCapture<S, C> {
    limit: RateLimit<S>,
    clock: C,
    source: String,
    state: ModalState,
    in_flight: bool,
}

impl<S: KeyValueStore, C: Clock> LeadCapture<S, C> {
    pub fn new(store: S, clock: C, source: impl Into<String>) -> Self {
        Self::with_rate_limit(RateLimit::new(store), clock, source)
    }

    pub fn with_rate_limit(limit: RateLimit<S>, clock: C, source: impl Into<String>) -> Self {
        Self {
            limit,
            clock,
            source: source.into(),
            state: ModalState::Closed,
            in_flight: false,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Show the modal. Checks the cooldown once, here.
    ///
    /// Reopening while an earlier request is still pending shows `Loading`
    /// until that request resolves.
    pub fn open(&mut self) -> ModalState {
        self.state = if self.in_flight {
            ModalState::Loading
        } else if self.limit.is_blocked(self.clock.now_ms()) {
            log::info!("Lead modal opened inside the cooldown window");
            ModalState::Blocked
        } else {
            ModalState::Form
        };
        self.state
    }

    pub fn close(&mut self) -> ModalState {
        self.state = ModalState::Closed;
        self.state
    }

    /// Time left until the next submission is accepted.
    pub fn cooldown_remaining(&self) -> Option<Duration> {
        self.limit.remaining(self.clock.now_ms())
    }

    /// Validate and move `Form -> Loading`, returning the payload to send.
    ///
    /// On error nothing changes and no request must be made.
    pub fn begin<V: Verifier>(
        &mut self,
        form: &SubmissionForm,
        verifier: &V,
    ) -> Result<LeadSubmission, SubmitError> {
        if self.state != ModalState::Form {
            return Err(SubmitError::NotAccepting(self.state));
        }
        form.validate()?;
        let token = verifier.token().ok_or(SubmitError::ValidationBlocked)?;

        let submission = form.to_submission(&token, &self.source, self.clock.now_ms());
        self.state = ModalState::Loading;
        self.in_flight = true;
        Ok(submission)
    }

    /// Apply the result of the request started by [`begin`](Self::begin).
    ///
    /// Success records the cooldown timestamp even if the modal was closed
    /// in the meantime. Without a pending request this is a no-op.
    pub fn resolve(&mut self, outcome: &Result<(), DeliveryError>) -> ModalState {
        if !self.in_flight {
            log::debug!("Ignoring delivery outcome with no request in flight");
            return self.state;
        }
        self.in_flight = false;

        match outcome {
            Ok(()) => {
                if let Err(e) = self.limit.record(self.clock.now_ms()) {
                    log::warn!("Submission delivered but cooldown not persisted: {e}");
                }
                if self.state == ModalState::Loading {
                    self.state = ModalState::Success;
                }
            }
            Err(e) => {
                log::warn!("Lead submission failed: {e}");
                if self.state == ModalState::Loading {
                    self.state = ModalState::Error;
                }
            }
        }
        self.state
    }

    /// `Error -> Form`. The cooldown is not consulted; nothing was sent.
    pub fn retry(&mut self) -> ModalState {
        if self.state == ModalState::Error {
            self.state = ModalState::Form;
        }
        self.state
    }

    /// Validate, deliver once, and apply the outcome.
    pub async fn submit<W: Webhook, V: Verifier>(
        &mut self,
        webhook: &W,
        form: &SubmissionForm,
        verifier: &V,
    ) -> Result<ModalState, SubmitError> {
        let submission = self.begin(form, verifier)?;
        let outcome = webhook.deliver(&submission).await;
        Ok(self.resolve(&outcome))
    }
}
