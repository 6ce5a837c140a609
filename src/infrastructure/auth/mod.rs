//! Authentication infrastructure module
//!
//! This module provides the shared-secret bearer token gate.

mod token_gate;

pub use token_gate::{TokenGate, DENIED_MESSAGE};
