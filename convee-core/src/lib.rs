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

//! Lead capture logic for the Convee landing site.
//!
//! Everything in here is target-agnostic: it runs in the browser (WASM) and
//! natively under `cargo test`. Browser-specific adapters (local storage,
//! the Turnstile widget) live in `convee-website` and plug into the seams
//! defined here.
//!
//! # Example
//!
//! ```no_run
//! use convee_core::{LeadCapture, MemoryStore, SubmissionForm, SystemClock, VerificationToken, WebhookClient};
//!
//! # async fn example() {
//! let webhook = WebhookClient::new("https://hooks.example.com/convee");
//! let mut capture = LeadCapture::new(MemoryStore::default(), SystemClock, "convee-landing");
//! capture.open();
//!
//! let form = SubmissionForm::new("Erika Mustermann", "erika@example.de");
//! let token = Some(VerificationToken::new("turnstile-token"));
//! match capture.submit(&webhook, &form, &token).await {
//!     Ok(state) => println!("modal is now {state:?}"),
//!     Err(e) => println!("rejected locally: {e}"),
//! }
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod flow;
pub mod form;
pub mod rate_limit;
pub mod roi;
pub mod storage;
pub mod verification;
pub mod webhook;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "testing"))]
pub use clock::ManualClock;
pub use config::{ConfigOverrides, SiteConfig};
pub use error::{ConfigError, DeliveryError, FormError, StorageError, SubmitError};
pub use flow::{LeadCapture, ModalState};
pub use form::{LeadSubmission, SubmissionForm};
pub use rate_limit::RateLimit;
pub use roi::{RoiEstimate, RoiInputs};
pub use storage::{KeyValueStore, MemoryStore};
pub use verification::{VerificationToken, Verifier};
pub use webhook::{Webhook, WebhookClient};
