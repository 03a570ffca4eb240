//! Script document model: target config, load phases, and scenarios.
//!
//! These records are accumulated by the wizard and consumed by the text
//! builder in `slsart-core`. They are immutable once built -- the builder
//! only reads them.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Target section of a load-test script.
///
/// The `target` value is embedded verbatim in the generated document. It is
/// validated upstream by the wizard (scheme, no path), never by the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Base URL of the endpoint under test (e.g. `https://example.com`).
    pub target: String,
}

/// One load-ramp stage.
///
/// Order within the phase sequence is significant: phases execute in the
/// order they were collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Phase length in seconds.
    pub duration: u64,
    /// Starting load in requests per second. Rendered as `arrivalRate`
    /// in the generated document.
    pub rate: u64,
    /// Optional load to ramp toward over the phase. A value of zero is
    /// treated the same as absent when rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ramp_to: Option<u64>,
}

/// HTTP verbs the generated script can exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpVerb {
    /// Whether requests with this verb carry an example payload line.
    pub fn takes_payload(&self) -> bool {
        matches!(self, HttpVerb::Post | HttpVerb::Put)
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpVerb::Get => write!(f, "get"),
            HttpVerb::Post => write!(f, "post"),
            HttpVerb::Put => write!(f, "put"),
            HttpVerb::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for HttpVerb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "get" => Ok(HttpVerb::Get),
            "post" => Ok(HttpVerb::Post),
            "put" => Ok(HttpVerb::Put),
            "delete" => Ok(HttpVerb::Delete),
            other => Err(format!("invalid HTTP verb: '{other}'")),
        }
    }
}

/// Shape of the example payload emitted for verbs that carry a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadType {
    Json,
    Body,
}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadType::Json => write!(f, "json"),
            PayloadType::Body => write!(f, "body"),
        }
    }
}

impl FromStr for PayloadType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(PayloadType::Json),
            "body" => Ok(PayloadType::Body),
            other => Err(format!("invalid payload type: '{other}'")),
        }
    }
}

/// One HTTP request within a flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub verb: HttpVerb,
    /// Url path (may include query), embedded verbatim between quotes.
    pub path: String,
    /// Example payload shape. Meaningful only for post/put; a post/put
    /// without one renders a degenerate placeholder line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_type: Option<PayloadType>,
}

/// An ordered list of requests executed as one user journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flow {
    pub requests: Vec<Request>,
}

/// A scenario groups one or more flows.
///
/// The wizard always produces single-flow scenarios; multi-flow scenarios
/// are representable for hand-assembled inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub flows: Vec<Flow>,
}
