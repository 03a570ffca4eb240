//! Capability traits consumed by the wizard.
//!
//! These are the "ports" the infrastructure layer implements. The wizard
//! depends on traits only -- never on concrete terminal or filesystem code.

pub mod fs;
