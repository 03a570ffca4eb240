//! Shared domain types for slsart.
//!
//! This crate contains the core domain types used across the slsart tool:
//! the script document model (target, phases, scenarios), the wizard
//! question/answer wire types, settings, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod script;
pub mod wizard;
