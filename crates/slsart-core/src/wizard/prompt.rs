//! Prompter trait -- the surface-agnostic question-asking interface.
//!
//! The collector drives the wizard through this trait; the dialoguer-backed
//! terminal implementation lives in slsart-infra. Uses RPITIT (no
//! async_trait) consistent with all project traits.

use std::future::Future;

use slsart_types::error::PromptError;
use slsart_types::wizard::{Answers, Question};

/// Question-asking capability.
///
/// Implementations present the questions in order and re-ask on validation
/// failure. A question whose visibility predicate rejects the answers
/// gathered so far in the round is skipped and absent from the returned
/// map.
pub trait Prompter {
    /// Ask one round of questions and return the validated answers.
    fn ask(
        &self,
        questions: &[Question],
    ) -> impl Future<Output = Result<Answers, PromptError>> + Send;
}
