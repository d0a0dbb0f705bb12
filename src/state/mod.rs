//! Host-testable page state and rules.
//!
//! DESIGN
//! ======
//! Everything that decides *what* should happen lives here as plain data and
//! functions. `bindings` only reads the DOM, asks these modules, and writes
//! the answer back.

pub mod contact_form;
pub mod hero;
pub mod nav;
pub mod notifications;
pub mod theme;
