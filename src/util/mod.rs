//! Utility helpers shared across the landing page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page binding
//! logic to improve reuse and testability.

pub mod analytics;
#[cfg(feature = "csr")]
pub mod dom;
pub mod theme;
pub mod viewport;
