//! Client-side signup form for the waitlist API.
//!
//! # Features
//!
//! - **HTTP client** - `WaitlistClient` posts `{ "email": ... }` to `/api/waitlist`
//! - **Form state** - `SignupForm` holds the input field and the button label,
//!   and turns a click into a `FormOutcome` for the UI to surface
//!
//! # Example
//!
//! ```rust,ignore
//! use waitlist_client::{FormOutcome, SignupForm, WaitlistClient, WaitlistConfig};
//!
//! let client = WaitlistClient::new(WaitlistConfig {
//!     base_url: "https://zerocad.example".to_string(),
//! })?;
//!
//! let mut form = SignupForm::new();
//! form.set_email("ada@example.com");
//! match form.submit(&client).await {
//!     FormOutcome::Confirmed => println!("{}", form.button_label()),
//!     FormOutcome::Alert(message) => eprintln!("{message}"),
//!     FormOutcome::Unchanged => {}
//! }
//! ```

mod client;
mod error;
mod form;

pub use client::{WaitlistClient, WaitlistConfig};
pub use error::ClientError;
pub use form::{
    BUTTON_LABEL, CONFIRMATION_DURATION, CONFIRMATION_LABEL, EMPTY_EMAIL_ALERT, FormOutcome,
    GENERIC_ERROR_ALERT, SignupForm,
};

// Re-export shared types for convenience
pub use waitlist_types::WaitlistReply;
