//! chatshield - An interactive security-awareness presentation on WhatsApp and SMS
//! phishing risks
//!
//! This library provides the presentation content, the link risk heuristics and the
//! state machines behind the quiz, checklist, bingo and PIN-sharing simulator.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod content;
pub mod core;
pub mod output;
pub mod paths;
pub mod render;
pub mod session;
