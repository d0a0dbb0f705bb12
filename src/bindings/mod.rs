//! Event wiring for the server-rendered landing page markup.
//!
//! ARCHITECTURE
//! ============
//! Each binding looks up the elements it needs, returns early when any is
//! missing, and attaches page-lifetime listeners. Decisions are delegated to
//! `state`; these modules only translate between events and the DOM. Only
//! `contact_form` builds on the host, for its submission decisions.

#[cfg(feature = "csr")]
pub mod analytics;
pub mod contact_form;
#[cfg(feature = "csr")]
pub mod hero;
#[cfg(feature = "csr")]
pub mod namespace;
#[cfg(feature = "csr")]
pub mod navigation;
#[cfg(feature = "csr")]
pub mod reveal;
#[cfg(feature = "csr")]
pub mod theme_switcher;
#[cfg(feature = "csr")]
pub mod window_events;
