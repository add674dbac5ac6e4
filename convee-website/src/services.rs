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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Lead capture wiring shared through Leptos context.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Duration;

use convee_analytics::{track, FunnelEvent};
use convee_core::{
    DeliveryError, LeadCapture, LeadSubmission, ModalState, SiteConfig, SubmissionForm,
    SubmitError, SystemClock, Verifier, Webhook, WebhookClient,
};
use leptos::*;

use crate::storage::SiteStore;

pub type SiteCapture = LeadCapture<SiteStore, SystemClock>;

type Delivery<'a> = Pin<Box<dyn Future<Output = Result<(), DeliveryError>> + 'a>>;

/// [`Webhook`] behind a pointer, so the receiver can be swapped without
/// making every component generic.
trait DeliverLead {
    fn deliver_lead<'a>(&'a self, submission: &'a LeadSubmission) -> Delivery<'a>;
}

impl<W: Webhook> DeliverLead for W {
    fn deliver_lead<'a>(&'a self, submission: &'a LeadSubmission) -> Delivery<'a> {
        Box::pin(self.deliver(submission))
    }
}

/// The lead modal's controller plus its collaborators.
///
/// `state` mirrors the controller so views can react to it. The controller
/// itself is only borrowed inside synchronous sections, never across the
/// webhook await.
#[derive(Clone)]
pub struct LeadServices {
    pub capture: Rc<RefCell<SiteCapture>>,
    webhook: Rc<dyn DeliverLead>,
    pub config: Rc<SiteConfig>,
    pub state: RwSignal<ModalState>,
}

impl LeadServices {
    /// Posts to `config.webhook_url`. Must be called inside a reactive owner
    /// (a component).
    pub fn new(config: SiteConfig, store: SiteStore) -> Self {
        let webhook = WebhookClient::new(&config.webhook_url);
        Self::with_webhook(config, store, webhook)
    }

    pub fn with_webhook<W: Webhook + 'static>(
        config: SiteConfig,
        store: SiteStore,
        webhook: W,
    ) -> Self {
        let capture = LeadCapture::new(store, SystemClock, config.source_tag.clone());
        Self {
            capture: Rc::new(RefCell::new(capture)),
            webhook: Rc::new(webhook),
            config: Rc::new(config),
            state: create_rw_signal(ModalState::Closed),
        }
    }

    pub fn open(&self) {
        let next = self.capture.borrow_mut().open();
        self.state.set(next);
        track(FunnelEvent::ModalOpened);
        if next == ModalState::Blocked {
            track(FunnelEvent::BlockedShown);
        }
    }

    pub fn close(&self) {
        let next = self.capture.borrow_mut().close();
        self.state.set(next);
    }

    pub fn retry(&self) {
        let next = self.capture.borrow_mut().retry();
        self.state.set(next);
        track(FunnelEvent::RetryClicked);
    }

    /// Validate and send `form`.
    ///
    /// A local rejection comes back as `Err` and leaves the modal as it is.
    /// Otherwise the modal shows `Loading` until the webhook answers.
    pub fn submit<V: Verifier>(&self, form: &SubmissionForm, verifier: &V) -> Result<(), SubmitError> {
        let submission = match self.capture.borrow_mut().begin(form, verifier) {
            Ok(submission) => submission,
            Err(e) => {
                if e == SubmitError::ValidationBlocked {
                    track(FunnelEvent::VerificationMissing);
                }
                return Err(e);
            }
        };
        self.state.set(ModalState::Loading);
        track(FunnelEvent::SubmissionSent);

        let services = self.clone();
        spawn_local(async move {
            let outcome = services.webhook.deliver_lead(&submission).await;
            track(match outcome {
                Ok(()) => FunnelEvent::SubmissionSucceeded,
                Err(_) => FunnelEvent::SubmissionFailed,
            });
            let next = services.capture.borrow_mut().resolve(&outcome);
            services.state.set(next);
        });
        Ok(())
    }

    pub fn cooldown_remaining(&self) -> Option<Duration> {
        self.capture.borrow().cooldown_remaining()
    }
}

pub fn provide_lead_services(services: LeadServices) {
    provide_context(services);
}

pub fn use_lead_services() -> LeadServices {
    expect_context::<LeadServices>()
}
