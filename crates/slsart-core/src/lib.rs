//! Wizard logic and the script text builder for slsart.
//!
//! This crate defines the "ports" (the `Prompter` and `FileSystem` traits)
//! that the infrastructure layer implements. It depends only on
//! `slsart-types` -- never on `slsart-infra` or any terminal/IO crate.

pub mod builder;
pub mod service;
pub mod wizard;
