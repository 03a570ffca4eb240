//! Script text builder.
//!
//! Assembles the generated load-test document as an ordered list of lines.
//! Every function here is pure and synchronous; identical inputs always
//! produce identical lines. Composition mirrors the document structure --
//! `build_script` concatenates the header, phase, and scenario blocks and
//! joins them with the platform line separator.

use slsart_types::script::{Flow, PayloadType, Phase, Request, Scenario, TargetConfig};

/// Platform native line separator used to join the finished document.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Example payload emitted for each payload type.
pub fn payload_sample(payload_type: PayloadType) -> &'static str {
    match payload_type {
        PayloadType::Json => r#"{ "name": "value", "rank": 1 }"#,
        PayloadType::Body => "name=value&rank=1",
    }
}

/// Comment banner and the `config:` block naming the target endpoint.
///
/// The target value is interpolated verbatim -- no quoting, no escaping.
pub fn build_main(config: &TargetConfig) -> Vec<String> {
    vec![
        "# Thank you for trying serverless-artillery!".to_string(),
        "# This default script is intended to get you started quickly.".to_string(),
        "# There is a lot more that Artillery can do.".to_string(),
        "# You can find great documentation of the possibilities at:".to_string(),
        "# https://artillery.io/docs/".to_string(),
        String::new(),
        "config:".to_string(),
        "  # this hostname will be used as a prefix for each URI in the flow unless a complete URI is specified"
            .to_string(),
        format!("  target: {}", config.target),
    ]
}

/// The `phases:` header followed by each phase block in order.
///
/// An empty slice yields the header alone.
pub fn build_phases(phases: &[Phase]) -> Vec<String> {
    let mut lines = vec!["  phases:".to_string()];

    for phase in phases {
        lines.extend(build_phase(phase));
    }

    lines
}

/// One phase block: list marker, `duration:`, and `arrivalRate:` lines.
///
/// The input field is named `rate` but renders as `arrivalRate`. A
/// `rampTo` line is appended only when the value is present and non-zero;
/// a ramp of zero is emitted the same as no ramp at all.
pub fn build_phase(phase: &Phase) -> Vec<String> {
    let mut lines = vec![
        "    -".to_string(),
        format!("      duration: {}", phase.duration),
        format!("      arrivalRate: {}", phase.rate),
    ];

    if let Some(ramp_to) = phase.ramp_to.filter(|ramp_to| *ramp_to > 0) {
        lines.push(format!("      rampTo: {ramp_to}"));
    }

    lines
}

/// The `scenarios:` header followed by each scenario block in order.
///
/// An empty slice yields the header alone.
pub fn build_scenarios(scenarios: &[Scenario]) -> Vec<String> {
    let mut lines = vec!["scenarios:".to_string()];

    for scenario in scenarios {
        lines.extend(build_scenario(scenario));
    }

    lines
}

/// One scenario block: list marker, then a `flow:` header per flow with
/// its request blocks. Consecutive flows have no separator between them.
pub fn build_scenario(scenario: &Scenario) -> Vec<String> {
    let mut lines = vec!["  -".to_string()];

    for flow in &scenario.flows {
        lines.push("    flow:".to_string());
        lines.extend(build_flow(flow));
    }

    lines
}

/// Request blocks of a flow, concatenated in order with no separators.
pub fn build_flow(flow: &Flow) -> Vec<String> {
    let mut lines = Vec::new();

    for request in &flow.requests {
        lines.extend(build_request(request));
    }

    lines
}

/// One request block: list marker, verb line, quoted url line.
///
/// Verbs that carry a body get a fourth line with an example payload; a
/// post/put without a payload type renders a literal `undefined` entry.
pub fn build_request(request: &Request) -> Vec<String> {
    let mut lines = vec![
        "      -".to_string(),
        format!("        {}:", request.verb),
        format!("          url: \"{}\"", request.path),
    ];

    if request.verb.takes_payload() {
        let payload_line = match request.payload_type {
            Some(payload_type) => {
                format!("          {payload_type}: {}", payload_sample(payload_type))
            }
            None => "          undefined: undefined".to_string(),
        };
        lines.push(payload_line);
    }

    lines
}

/// Assemble the complete document and join it with [`LINE_SEPARATOR`].
///
/// A final empty entry gives the document a trailing line break.
pub fn build_script(config: &TargetConfig, phases: &[Phase], scenarios: &[Scenario]) -> String {
    let mut lines = build_main(config);

    lines.extend(build_phases(phases));
    lines.extend(build_scenarios(scenarios));
    lines.push(String::new());

    lines.join(LINE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slsart_types::script::HttpVerb;

    fn request(verb: HttpVerb, path: &str, payload_type: Option<PayloadType>) -> Request {
        Request {
            verb,
            path: path.to_string(),
            payload_type,
        }
    }

    fn phase(duration: u64, rate: u64, ramp_to: Option<u64>) -> Phase {
        Phase {
            duration,
            rate,
            ramp_to,
        }
    }

    fn flow(requests: Vec<Request>) -> Flow {
        Flow { requests }
    }

    // --- request tests ---

    #[test]
    fn test_get_request_is_three_lines() {
        assert_eq!(
            build_request(&request(HttpVerb::Get, "/", None)),
            vec!["      -", "        get:", "          url: \"/\""]
        );
    }

    #[test]
    fn test_get_request_ignores_payload_type() {
        assert_eq!(
            build_request(&request(HttpVerb::Get, "/", Some(PayloadType::Json))),
            vec!["      -", "        get:", "          url: \"/\""]
        );
    }

    #[test]
    fn test_post_request_includes_json_payload_sample() {
        assert_eq!(
            build_request(&request(HttpVerb::Post, "/", Some(PayloadType::Json))),
            vec![
                "      -",
                "        post:",
                "          url: \"/\"",
                "          json: { \"name\": \"value\", \"rank\": 1 }",
            ]
        );
    }

    #[test]
    fn test_put_request_includes_body_payload_sample() {
        assert_eq!(
            build_request(&request(HttpVerb::Put, "/", Some(PayloadType::Body))),
            vec![
                "      -",
                "        put:",
                "          url: \"/\"",
                "          body: name=value&rank=1",
            ]
        );
    }

    #[test]
    fn test_delete_request_on_non_root_path() {
        assert_eq!(
            build_request(&request(HttpVerb::Delete, "/bug/12345/", None)),
            vec!["      -", "        delete:", "          url: \"/bug/12345/\""]
        );
    }

    #[test]
    fn test_post_without_payload_type_renders_undefined() {
        assert_eq!(
            build_request(&request(HttpVerb::Post, "/", None)),
            vec![
                "      -",
                "        post:",
                "          url: \"/\"",
                "          undefined: undefined",
            ]
        );
    }

    // --- flow tests ---

    #[test]
    fn test_flow_concatenates_requests() {
        let f = flow(vec![
            request(HttpVerb::Get, "/", None),
            request(HttpVerb::Post, "/item/", Some(PayloadType::Body)),
            request(HttpVerb::Delete, "/item/1234/", None),
            request(HttpVerb::Put, "/action/1234/", Some(PayloadType::Json)),
        ]);
        assert_eq!(
            build_flow(&f),
            vec![
                "      -",
                "        get:",
                "          url: \"/\"",
                "      -",
                "        post:",
                "          url: \"/item/\"",
                "          body: name=value&rank=1",
                "      -",
                "        delete:",
                "          url: \"/item/1234/\"",
                "      -",
                "        put:",
                "          url: \"/action/1234/\"",
                "          json: { \"name\": \"value\", \"rank\": 1 }",
            ]
        );
    }

    #[test]
    fn test_empty_flow_is_empty() {
        assert!(build_flow(&flow(vec![])).is_empty());
    }

    // --- scenario tests ---

    #[test]
    fn test_scenario_with_single_flow() {
        let scenario = Scenario {
            flows: vec![flow(vec![request(HttpVerb::Get, "/", None)])],
        };
        assert_eq!(
            build_scenario(&scenario),
            vec![
                "  -",
                "    flow:",
                "      -",
                "        get:",
                "          url: \"/\"",
            ]
        );
    }

    #[test]
    fn test_scenario_with_multiple_flows() {
        let scenario = Scenario {
            flows: vec![
                flow(vec![
                    request(HttpVerb::Get, "/", None),
                    request(HttpVerb::Put, "/", Some(PayloadType::Body)),
                ]),
                flow(vec![
                    request(HttpVerb::Post, "/customers/", Some(PayloadType::Body)),
                    request(HttpVerb::Get, "/customer/12345/", None),
                ]),
            ],
        };
        assert_eq!(
            build_scenario(&scenario),
            vec![
                "  -",
                "    flow:",
                "      -",
                "        get:",
                "          url: \"/\"",
                "      -",
                "        put:",
                "          url: \"/\"",
                "          body: name=value&rank=1",
                "    flow:",
                "      -",
                "        post:",
                "          url: \"/customers/\"",
                "          body: name=value&rank=1",
                "      -",
                "        get:",
                "          url: \"/customer/12345/\"",
            ]
        );
    }

    #[test]
    fn test_scenarios_empty_is_header_only() {
        assert_eq!(build_scenarios(&[]), vec!["scenarios:"]);
    }

    #[test]
    fn test_scenarios_concatenates_in_order() {
        let scenarios = vec![
            Scenario {
                flows: vec![flow(vec![request(HttpVerb::Get, "/", None)])],
            },
            Scenario {
                flows: vec![flow(vec![request(HttpVerb::Delete, "/old/", None)])],
            },
        ];
        assert_eq!(
            build_scenarios(&scenarios),
            vec![
                "scenarios:",
                "  -",
                "    flow:",
                "      -",
                "        get:",
                "          url: \"/\"",
                "  -",
                "    flow:",
                "      -",
                "        delete:",
                "          url: \"/old/\"",
            ]
        );
    }

    // --- phase tests ---

    #[test]
    fn test_phase_without_ramp_is_three_lines() {
        assert_eq!(
            build_phase(&phase(100, 5, None)),
            vec!["    -", "      duration: 100", "      arrivalRate: 5"]
        );
    }

    #[test]
    fn test_phase_with_ramp_is_four_lines() {
        assert_eq!(
            build_phase(&phase(100, 5, Some(66))),
            vec![
                "    -",
                "      duration: 100",
                "      arrivalRate: 5",
                "      rampTo: 66",
            ]
        );
    }

    #[test]
    fn test_phase_ramp_of_zero_is_dropped() {
        assert_eq!(build_phase(&phase(100, 5, Some(0))), build_phase(&phase(100, 5, None)));
    }

    #[test]
    fn test_phases_empty_is_header_only() {
        assert_eq!(build_phases(&[]), vec!["  phases:"]);
    }

    #[test]
    fn test_phases_concatenates_in_order() {
        assert_eq!(
            build_phases(&[phase(100, 5, None), phase(100, 5, Some(66))]),
            vec![
                "  phases:",
                "    -",
                "      duration: 100",
                "      arrivalRate: 5",
                "    -",
                "      duration: 100",
                "      arrivalRate: 5",
                "      rampTo: 66",
            ]
        );
    }

    #[test]
    fn test_phase_order_is_preserved() {
        let a = phase(10, 1, None);
        let b = phase(20, 2, Some(4));
        let forward = build_phases(&[a.clone(), b.clone()]);
        let reversed = build_phases(&[b, a]);

        assert_eq!(forward[1..4], reversed[5..8]);
        assert_eq!(forward[4..8], reversed[1..5]);
    }

    // --- header tests ---

    #[test]
    fn test_main_contains_target() {
        assert_eq!(
            build_main(&TargetConfig {
                target: "http://www.google.com".to_string(),
            }),
            vec![
                "# Thank you for trying serverless-artillery!",
                "# This default script is intended to get you started quickly.",
                "# There is a lot more that Artillery can do.",
                "# You can find great documentation of the possibilities at:",
                "# https://artillery.io/docs/",
                "",
                "config:",
                "  # this hostname will be used as a prefix for each URI in the flow unless a complete URI is specified",
                "  target: http://www.google.com",
            ]
        );
    }

    // --- complete document tests ---

    fn golden_inputs() -> (TargetConfig, Vec<Phase>, Vec<Scenario>) {
        let config = TargetConfig {
            target: "http://www.google.com".to_string(),
        };
        let phases = vec![phase(100, 5, None), phase(100, 5, Some(66))];
        let scenarios = vec![
            Scenario {
                flows: vec![flow(vec![request(HttpVerb::Get, "/", None)])],
            },
            Scenario {
                flows: vec![
                    flow(vec![
                        request(HttpVerb::Get, "/", None),
                        request(HttpVerb::Put, "/", Some(PayloadType::Body)),
                    ]),
                    flow(vec![
                        request(HttpVerb::Post, "/customers/", Some(PayloadType::Body)),
                        request(HttpVerb::Get, "/customer/12345/", None),
                    ]),
                ],
            },
        ];
        (config, phases, scenarios)
    }

    #[test]
    fn test_build_script_complete_document() {
        let (config, phases, scenarios) = golden_inputs();
        let expected = [
            "# Thank you for trying serverless-artillery!",
            "# This default script is intended to get you started quickly.",
            "# There is a lot more that Artillery can do.",
            "# You can find great documentation of the possibilities at:",
            "# https://artillery.io/docs/",
            "",
            "config:",
            "  # this hostname will be used as a prefix for each URI in the flow unless a complete URI is specified",
            "  target: http://www.google.com",
            "  phases:",
            "    -",
            "      duration: 100",
            "      arrivalRate: 5",
            "    -",
            "      duration: 100",
            "      arrivalRate: 5",
            "      rampTo: 66",
            "scenarios:",
            "  -",
            "    flow:",
            "      -",
            "        get:",
            "          url: \"/\"",
            "  -",
            "    flow:",
            "      -",
            "        get:",
            "          url: \"/\"",
            "      -",
            "        put:",
            "          url: \"/\"",
            "          body: name=value&rank=1",
            "    flow:",
            "      -",
            "        post:",
            "          url: \"/customers/\"",
            "          body: name=value&rank=1",
            "      -",
            "        get:",
            "          url: \"/customer/12345/\"",
            "",
        ]
        .join(LINE_SEPARATOR);

        assert_eq!(build_script(&config, &phases, &scenarios), expected);
    }

    #[test]
    fn test_build_script_ends_with_line_separator() {
        let (config, phases, scenarios) = golden_inputs();
        let document = build_script(&config, &phases, &scenarios);
        assert!(document.ends_with(LINE_SEPARATOR));
        assert!(!document.ends_with(&format!("{LINE_SEPARATOR}{LINE_SEPARATOR}")));
    }

    #[test]
    fn test_build_script_is_deterministic() {
        let (config, phases, scenarios) = golden_inputs();
        let first = build_script(&config, &phases, &scenarios);
        let second = build_script(&config, &phases, &scenarios);
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_script_with_no_phases_or_scenarios() {
        let config = TargetConfig {
            target: "http://example.com".to_string(),
        };
        let document = build_script(&config, &[], &[]);
        let lines: Vec<&str> = document.split(LINE_SEPARATOR).collect();

        assert_eq!(lines[9], "  phases:");
        assert_eq!(lines[10], "scenarios:");
        assert_eq!(lines[11], "");
        assert_eq!(lines.len(), 12);
    }
}
