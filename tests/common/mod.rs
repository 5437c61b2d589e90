//! Integration test common infrastructure.
//!
//! Provides recording fakes for the platform collaborators and handlers
//! that log their invocation order.

#![allow(dead_code)]

pub mod handlers;
pub mod platform;

#[allow(unused_imports)]
pub use handlers::{Log, Record};
#[allow(unused_imports)]
pub use platform::{RecordingSink, RecordingSyncer, Sent};
