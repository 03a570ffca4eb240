//! Infrastructure layer for slsart.
//!
//! Contains implementations of the capability traits defined in
//! `slsart-core`: the dialoguer terminal prompter and the local filesystem
//! adapter, plus settings resolution from the environment and config file.

pub mod filesystem;
pub mod prompt;
pub mod settings;
