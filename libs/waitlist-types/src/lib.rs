//! Wire types shared by the waitlist API and its client.
//!
//! This crate provides:
//! - The signup request body (`JoinWaitlistRequest`)
//! - Success and error response bodies (`MessageResponse`, `ErrorResponse`)
//! - A lenient reply shape for clients (`WaitlistReply`)
//! - The fixed user-facing messages of the signup flow

mod messages;
mod requests;
mod responses;

pub use messages::{ADDED_TO_WAITLIST, INVALID_EMAIL, SERVER_ERROR, WAITLIST_PATH};
pub use requests::JoinWaitlistRequest;
pub use responses::{ErrorResponse, MessageResponse, WaitlistReply};
