//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data; components wrap it in `RwSignal`s provided via
//! context so the transition rules stay testable without a browser.

pub mod modal;
