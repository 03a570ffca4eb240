//! Question/answer wire types for the interactive wizard.
//!
//! A `Question` describes one prompt (kind, default, validation, visibility);
//! the prompter capability in `slsart-core` presents a slice of them and
//! returns an `Answers` map for the round. `ScriptDraft` accumulates parsed
//! rounds until the script document is built.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::script::{Flow, Phase, Request, Scenario, TargetConfig};

type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;
type WhenPredicate = Box<dyn Fn(&Answers) -> bool + Send + Sync>;

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// How a question is presented and what shape of answer it produces.
pub enum QuestionKind {
    /// Free-text input with an optional prefilled default.
    Input {
        default: Option<String>,
        /// Accept an empty answer (maps to "no value" downstream).
        allow_empty: bool,
    },
    /// Yes/no confirmation.
    Confirm { default: bool },
    /// Pick one item from a fixed list. The chosen item's display text
    /// is recorded as the answer.
    Select {
        choices: Vec<String>,
        default: usize,
    },
}

/// A single prompt presented to the user.
///
/// Built with the constructor matching its kind, then refined with chained
/// builder methods. Validators and visibility predicates are opaque closures
/// so question sets stay declarative data.
pub struct Question {
    /// Stable key the answer is stored under.
    pub name: &'static str,
    /// Text shown to the user.
    pub prompt: String,
    pub kind: QuestionKind,
    validate: Option<Validator>,
    when: Option<WhenPredicate>,
}

impl Question {
    /// Free-text question.
    pub fn input(name: &'static str, prompt: impl Into<String>) -> Self {
        Self {
            name,
            prompt: prompt.into(),
            kind: QuestionKind::Input {
                default: None,
                allow_empty: false,
            },
            validate: None,
            when: None,
        }
    }

    /// Yes/no question.
    pub fn confirm(name: &'static str, prompt: impl Into<String>, default: bool) -> Self {
        Self {
            name,
            prompt: prompt.into(),
            kind: QuestionKind::Confirm { default },
            validate: None,
            when: None,
        }
    }

    /// Single-choice list question. The first choice is preselected.
    pub fn select(name: &'static str, prompt: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            name,
            prompt: prompt.into(),
            kind: QuestionKind::Select {
                choices,
                default: 0,
            },
            validate: None,
            when: None,
        }
    }

    /// Prefill an input question with a default answer.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        if let QuestionKind::Input { default: d, .. } = &mut self.kind {
            *d = Some(default.into());
        }
        self
    }

    /// Allow an input question to be answered with nothing.
    pub fn allow_empty(mut self) -> Self {
        if let QuestionKind::Input { allow_empty, .. } = &mut self.kind {
            *allow_empty = true;
        }
        self
    }

    /// Attach an answer validator. The prompter re-asks until it passes,
    /// showing the returned message on rejection.
    pub fn with_validator(
        mut self,
        validate: impl Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }

    /// Only present this question when the predicate holds against the
    /// answers gathered earlier in the same round.
    pub fn ask_when(mut self, when: impl Fn(&Answers) -> bool + Send + Sync + 'static) -> Self {
        self.when = Some(Box::new(when));
        self
    }

    /// Whether this question should be presented given answers so far.
    pub fn should_ask(&self, answers: &Answers) -> bool {
        match &self.when {
            Some(when) => when(answers),
            None => true,
        }
    }

    /// Run the validator, if any, against a candidate answer.
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match &self.validate {
            Some(validate) => validate(value),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("name", &self.name)
            .field("prompt", &self.prompt)
            .field("has_validator", &self.validate.is_some())
            .field("has_when", &self.when.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// A validated answer produced by the prompter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Bool(bool),
}

impl Answer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(s) => Some(s),
            Answer::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Answer::Bool(b) => Some(*b),
            Answer::Text(_) => None,
        }
    }
}

/// Answers for one round of questions, keyed by question name.
///
/// Questions skipped by a visibility predicate are absent from the map.
#[derive(Debug, Clone, Default)]
pub struct Answers(HashMap<&'static str, Answer>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, answer: Answer) {
        self.0.insert(name, answer);
    }

    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Text answer by name. `None` when absent or not a text answer.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Answer::as_text)
    }

    /// Confirm answer by name. Absent counts as `false`.
    pub fn confirmed(&self, name: &str) -> bool {
        self.get(name).and_then(Answer::as_bool).unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// ScriptDraft
// ---------------------------------------------------------------------------

/// Accumulates wizard answers across rounds until the script is built.
#[derive(Debug, Clone, Default)]
pub struct ScriptDraft {
    /// Where the generated script will be written.
    pub filename: String,
    /// Base URL of the endpoint under test.
    pub endpoint: String,
    pub phases: Vec<Phase>,
    pub requests: Vec<Request>,
}

impl ScriptDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalize the draft into builder inputs.
    ///
    /// Every collected request becomes part of a single flow inside a
    /// single scenario; the endpoint becomes the target config.
    pub fn into_script_parts(self) -> (TargetConfig, Vec<Phase>, Vec<Scenario>) {
        let config = TargetConfig {
            target: self.endpoint,
        };
        let scenario = Scenario {
            flows: vec![Flow {
                requests: self.requests,
            }],
        };
        (config, self.phases, vec![scenario])
    }
}

/// Result of a completed wizard run.
#[derive(Debug, Clone)]
pub struct WrittenScript {
    /// Path the script was written to.
    pub path: PathBuf,
    /// Full document text, including the trailing line break.
    pub document: String,
}
