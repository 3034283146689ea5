//! Static site content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content is compiled into the binary and shared by the server render and the
//! hydrated client, so both sides always agree on what a project id means.

pub mod case_studies;
pub mod sections;
