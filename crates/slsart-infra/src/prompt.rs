//! Terminal prompter backed by dialoguer.
//!
//! Maps each `QuestionKind` onto the matching dialoguer widget and wires
//! question validators through `validate_with`, so an invalid answer is
//! re-asked in place with the question's own message.

use dialoguer::{Confirm, Input, Select};

use slsart_core::wizard::prompt::Prompter;
use slsart_types::error::PromptError;
use slsart_types::wizard::{Answer, Answers, Question, QuestionKind};

/// Interactive prompter for a real terminal session.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    async fn ask(&self, questions: &[Question]) -> Result<Answers, PromptError> {
        // Blank line between rounds keeps the session readable.
        println!();

        let mut answers = Answers::new();
        for question in questions {
            if !question.should_ask(&answers) {
                continue;
            }

            let answer = present(question).map_err(map_dialoguer_error)?;
            answers.insert(question.name, answer);
        }

        Ok(answers)
    }
}

/// Present a single question with the widget matching its kind.
fn present(question: &Question) -> Result<Answer, dialoguer::Error> {
    match &question.kind {
        QuestionKind::Input {
            default,
            allow_empty,
        } => {
            let mut input = Input::<String>::new().with_prompt(&question.prompt);
            if let Some(default) = default {
                input = input.default(default.clone());
            }
            if *allow_empty {
                input = input.allow_empty(true);
            }

            let value = input
                .validate_with(|candidate: &String| question.validate(candidate))
                .interact_text()?;
            Ok(Answer::Text(value))
        }

        QuestionKind::Confirm { default } => {
            let value = Confirm::new()
                .with_prompt(&question.prompt)
                .default(*default)
                .interact()?;
            Ok(Answer::Bool(value))
        }

        QuestionKind::Select { choices, default } => {
            let index = Select::new()
                .with_prompt(&question.prompt)
                .items(choices)
                .default(*default)
                .interact()?;
            Ok(Answer::Text(choices[index].clone()))
        }
    }
}

/// A Ctrl-C interrupt is a deliberate cancellation; everything else is a
/// terminal failure.
fn map_dialoguer_error(err: dialoguer::Error) -> PromptError {
    match err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            PromptError::Aborted
        }
        other => PromptError::Interaction(other.to_string()),
    }
}
