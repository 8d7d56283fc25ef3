//! Core domain logic for chatshield
//!
//! This module contains pure presentation logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`RiskLevel`, `Signal`, `LinkVerdict`, `Section`)
//! - `services/` - Evaluators and widget state machines

pub mod models;
pub mod services;
