//! Test utilities for HTTP and use case tests.
//!
//! This module provides:
//! - In-memory repository implementations for mocking persistence
//! - A fault-injecting repository for storage failure paths
//! - `TestAppStateBuilder` for assembling an `AppState` around those mocks
//! - `LogCapture` for asserting on emitted log events

mod app_state_builder;
mod log_capture;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use log_capture::*;
pub use waitlist_mocks::*;
