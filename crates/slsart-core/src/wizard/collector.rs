//! The wizard collection loop.
//!
//! Drives a `Prompter` through the base round, the phase loop, and the
//! request loop, accumulating a `ScriptDraft`. The loops are plain
//! sequential awaits: each round is asked and parsed before its
//! `add_another` answer decides whether to go around again. Nothing is
//! written until every round has completed.

use std::path::{Path, PathBuf};

use slsart_types::config::WizardSettings;
use slsart_types::error::WizardError;
use slsart_types::script::{Phase, Request};
use slsart_types::wizard::{Answers, ScriptDraft, WrittenScript};

use crate::builder;
use crate::service::fs::FileSystem;
use crate::wizard::prompt::Prompter;
use crate::wizard::questions;

/// Interactive script wizard.
///
/// Generic over the prompter so tests can script the conversation. The
/// file-existence probe backing the filename validator is injectable for
/// the same reason.
pub struct ScriptWizard<P: Prompter> {
    prompter: P,
    settings: WizardSettings,
    file_exists: fn(&Path) -> bool,
}

impl<P: Prompter> ScriptWizard<P> {
    pub fn new(prompter: P, settings: WizardSettings) -> Self {
        Self {
            prompter,
            settings,
            file_exists: default_file_exists,
        }
    }

    /// Replace the file-existence probe used by the filename validator.
    pub fn with_file_check(mut self, file_exists: fn(&Path) -> bool) -> Self {
        self.file_exists = file_exists;
        self
    }

    /// Run every round of questions and return the completed draft.
    ///
    /// Both loops continue while the user confirms `add_another`, so each
    /// produces at least one record. A prompter failure abandons the run.
    pub async fn collect(&self) -> Result<ScriptDraft, WizardError> {
        let mut draft = ScriptDraft::new();

        let base = self
            .prompter
            .ask(&questions::base_questions(self.file_exists))
            .await?;
        draft.filename = required_text(&base, "filename")?.to_string();
        draft.endpoint = required_text(&base, "endpoint")?.to_string();
        tracing::debug!(
            filename = %draft.filename,
            endpoint = %draft.endpoint,
            "collected script header"
        );

        loop {
            let round = self
                .prompter
                .ask(&questions::phase_questions(&self.settings, draft.phases.len()))
                .await?;
            draft.phases.push(phase_from_answers(&round)?);

            if !round.confirmed("add_another") {
                break;
            }
        }

        loop {
            let round = self
                .prompter
                .ask(&questions::request_questions(
                    &draft.endpoint,
                    draft.requests.len(),
                ))
                .await?;
            draft.requests.push(request_from_answers(&round)?);

            if !round.confirmed("add_another") {
                break;
            }
        }

        tracing::debug!(
            phases = draft.phases.len(),
            requests = draft.requests.len(),
            "wizard rounds complete"
        );

        Ok(draft)
    }

    /// Collect answers, build the script document, and write it out.
    ///
    /// The single write happens only after both loops complete and the
    /// document is fully assembled.
    pub async fn run<F: FileSystem>(&self, fs: &F) -> Result<WrittenScript, WizardError> {
        let draft = self.collect().await?;
        let path = PathBuf::from(&draft.filename);

        let (config, phases, scenarios) = draft.into_script_parts();
        let document = builder::build_script(&config, &phases, &scenarios);

        fs.write_file(&path, &document)
            .await
            .map_err(|source| WizardError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), bytes = document.len(), "script written");

        Ok(WrittenScript { path, document })
    }
}

fn default_file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Text answer that must be present in the round.
fn required_text<'a>(answers: &'a Answers, name: &'static str) -> Result<&'a str, WizardError> {
    answers.text(name).ok_or(WizardError::MissingAnswer(name))
}

fn required_u64(answers: &Answers, name: &'static str) -> Result<u64, WizardError> {
    required_text(answers, name)?
        .trim()
        .parse()
        .map_err(|err: std::num::ParseIntError| WizardError::InvalidAnswer {
            name,
            detail: err.to_string(),
        })
}

/// Parse one phase round. An empty ramp answer means no ramp; a zero
/// answer is kept here and dropped later when the script is rendered.
fn phase_from_answers(answers: &Answers) -> Result<Phase, WizardError> {
    let ramp_to = match answers.text("ramp_to").map(str::trim) {
        None => None,
        Some("") => None,
        Some(raw) => Some(raw.parse().map_err(|err: std::num::ParseIntError| {
            WizardError::InvalidAnswer {
                name: "ramp_to",
                detail: err.to_string(),
            }
        })?),
    };

    Ok(Phase {
        duration: required_u64(answers, "duration")?,
        rate: required_u64(answers, "rate")?,
        ramp_to,
    })
}

/// Parse one request round. The payload answer is absent for verbs that
/// carry no body.
fn request_from_answers(answers: &Answers) -> Result<Request, WizardError> {
    let verb = required_text(answers, "verb")?
        .parse()
        .map_err(|detail| WizardError::InvalidAnswer { name: "verb", detail })?;

    let payload_type = answers
        .text("payload_type")
        .map(|raw| {
            raw.parse().map_err(|detail| WizardError::InvalidAnswer {
                name: "payload_type",
                detail,
            })
        })
        .transpose()?;

    Ok(Request {
        verb,
        path: required_text(answers, "path")?.to_string(),
        payload_type,
    })
}
