//! Question sets for the script wizard.
//!
//! Prompt texts and validation messages are fixed. The collector composes
//! these sets into rounds; answer validation lives here, answer parsing
//! lives with the collector.

use std::path::Path;

use slsart_types::config::WizardSettings;
use slsart_types::script::HttpVerb;
use slsart_types::wizard::Question;
use url::Url;

/// Questions asked once at the start of a run: where to write the script
/// and which endpoint it should exercise.
pub fn base_questions(file_exists: fn(&Path) -> bool) -> Vec<Question> {
    vec![
        Question::input("filename", "Name of script file to create")
            .with_default("script.yml")
            .with_validator(move |value| {
                if file_exists(Path::new(value)) {
                    Err(format!("File {value} already exists. Choose another name."))
                } else {
                    Ok(())
                }
            }),
        Question::input("endpoint", "Base URL to http:// or https:// endpoint")
            .with_default("http://aws.amazon.com")
            .with_validator(|value| validate_endpoint(value)),
    ]
}

/// One round of phase questions. `collected` is the number of phases
/// gathered so far and drives the prompt numbering.
pub fn phase_questions(settings: &WizardSettings, collected: usize) -> Vec<Question> {
    let max_duration = settings.max_script_duration_secs;

    vec![
        Question::input(
            "duration",
            format!("Length of the test phase #{} (in seconds)", collected + 1),
        )
        .with_default("30")
        .with_validator(move |value| match value.trim().parse::<u64>() {
            Ok(n) if n > 0 && n <= max_duration => Ok(()),
            _ => Err(format!(
                "Enter a valid phase length less than {max_duration} seconds."
            )),
        }),
        Question::input("rate", "Starting load (in requests per second)")
            .with_default("10")
            .with_validator(|value| match value.trim().parse::<u64>() {
                Ok(n) if n > 0 => Ok(()),
                _ => Err("Enter a positive value for starting load.".to_string()),
            }),
        Question::input("ramp_to", "Optional \"Ramp To\" load (in requests per second)")
            .allow_empty()
            .with_validator(|value| {
                let trimmed = value.trim();
                if trimmed.is_empty() || trimmed.parse::<u64>().is_ok() {
                    Ok(())
                } else {
                    Err("Enter a positive value for ramp to load.".to_string())
                }
            }),
        Question::confirm("add_another", "Add another phase?", false),
    ]
}

/// One round of request questions. The payload question only appears for
/// verbs that carry a body.
pub fn request_questions(endpoint: &str, collected: usize) -> Vec<Question> {
    vec![
        Question::select(
            "verb",
            format!("HTTP verb for request #{}", collected + 1),
            vec![
                "GET".to_string(),
                "POST".to_string(),
                "PUT".to_string(),
                "DELETE".to_string(),
            ],
        ),
        Question::input(
            "path",
            format!("Url path (may include query) from {endpoint}"),
        )
        .with_default("/"),
        Question::select(
            "payload_type",
            "Example payload type",
            vec!["JSON".to_string(), "BODY".to_string()],
        )
        .ask_when(|answers| {
            answers
                .text("verb")
                .and_then(|verb| verb.parse::<HttpVerb>().ok())
                .is_some_and(|verb| verb.takes_payload())
        }),
        Question::confirm("add_another", "Add another scenario?", false),
    ]
}

/// Accept absolute http/https URLs whose path is empty or `/`.
fn validate_endpoint(value: &str) -> Result<(), String> {
    const INVALID_URL: &str = "Please enter a valid base URL.\n\
        Include http:// or https:// protocol, hostname, with optional user and port.\n\
        Do not include path or query string.";

    if let Ok(url) = Url::parse(value) {
        let valid_protocol = matches!(url.scheme(), "http" | "https");
        let valid_path = url.path().is_empty() || url.path() == "/";

        if valid_protocol && valid_path {
            return Ok(());
        }
    }

    Err(INVALID_URL.to_string())
}
