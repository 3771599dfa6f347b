//! Core utilities shared by every layer of the engine.
//!
//! - error     - error taxonomy for the host-facing API
//! - logging   - `log` backend that forwards to the browser console

pub mod error;
pub mod logging;
