//! Interactive wizard: the prompter port, question sets, and the collection
//! loop that turns answers into a written script document.

pub mod collector;
pub mod prompt;
pub mod questions;
