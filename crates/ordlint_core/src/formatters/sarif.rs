//! SARIF (Static Analysis Results Interchange Format) output formatter.
//!
//! Implements SARIF 2.1.0 format for integration with GitHub Advanced Security
//! and other CI/CD tools.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::{FileReport, Finding, Rule};

/// SARIF version constant
const SARIF_VERSION: &str = "2.1.0";

const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Tool information for SARIF
const TOOL_NAME: &str = "ordlint";

/// Generates SARIF output from file reports
pub fn generate_sarif(reports: &[FileReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SarifLog::from_reports(reports))
}

/// Root SARIF log structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<Run>,
}

impl SarifLog {
    fn from_reports(reports: &[FileReport]) -> Self {
        Self {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![Run::from_reports(reports)],
        }
    }
}

/// A single run of the tool
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Run {
    tool: Tool,
    results: Vec<SarifResult>,
}

impl Run {
    fn from_reports(reports: &[FileReport]) -> Self {
        let mut results = Vec::new();
        let mut rules = BTreeMap::new();

        for report in reports {
            for finding in &report.errors {
                results.push(SarifResult::from_finding(finding, &report.path));
                rules
                    .entry(finding.rule)
                    .or_insert_with(|| ReportingDescriptor::new(finding.rule));
            }
        }

        Self {
            tool: Tool {
                driver: ToolComponent {
                    name: TOOL_NAME,
                    version: option_env!("CARGO_PKG_VERSION"),
                    rules: rules.into_values().collect(),
                },
            },
            results,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    driver: ToolComponent,
}

/// Tool component (driver)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolComponent {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rules: Vec<ReportingDescriptor>,
}

/// Rule descriptor
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportingDescriptor {
    id: &'static str,
    short_description: Message,
}

impl ReportingDescriptor {
    fn new(rule: Rule) -> Self {
        Self {
            id: rule.id(),
            short_description: Message::text(rule.description()),
        }
    }
}

#[derive(Debug, Serialize)]
struct Message {
    text: String,
}

impl Message {
    fn text(s: impl Into<String>) -> Self {
        Self { text: s.into() }
    }
}

/// A single result (finding)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: &'static str,
    level: &'static str,
    message: Message,
    locations: Vec<Location>,
}

impl SarifResult {
    fn from_finding(finding: &Finding, path: &Path) -> Self {
        Self {
            rule_id: finding.rule.id(),
            level: "error",
            message: Message::text(&finding.message),
            locations: vec![Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri: path.to_string_lossy().replace('\\', "/"),
                    },
                    region: Region {
                        start_line: finding.line,
                    },
                },
            }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    physical_location: PhysicalLocation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PhysicalLocation {
    artifact_location: ArtifactLocation,
    region: Region,
}

/// Artifact location (file path)
#[derive(Debug, Serialize)]
struct ArtifactLocation {
    uri: String,
}

/// Region; findings are whole-line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Region {
    start_line: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(path: &str, errors: Vec<Finding>) -> FileReport {
        FileReport {
            path: PathBuf::from(path),
            errors,
            fixed_content: String::new(),
            changed: false,
        }
    }

    #[test]
    fn test_sarif_empty_results() {
        let sarif = generate_sarif(&[]).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&sarif).unwrap();
        assert_eq!(parsed["version"], "2.1.0");
        // SARIF requires at least one run even with empty results
        assert_eq!(parsed["runs"].as_array().unwrap().len(), 1);
        assert!(parsed["runs"][0]["results"].as_array().unwrap().is_empty());
        assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "ordlint");
        assert!(
            parsed["$schema"]
                .as_str()
                .unwrap()
                .contains("sarif-schema-2.1.0.json")
        );
    }

    #[test]
    fn test_sarif_single_finding() {
        let finding = Finding::new(Rule::ListNumbering, 2, "Expected list item to be '2.'");
        let sarif = generate_sarif(&[report("docs/steps.md", vec![finding])]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&sarif).unwrap();

        let result = &parsed["runs"][0]["results"][0];
        assert_eq!(result["ruleId"], "list-numbering");
        assert_eq!(result["level"], "error");
        assert_eq!(result["message"]["text"], "Expected list item to be '2.'");

        let location = &result["locations"][0]["physicalLocation"];
        assert_eq!(location["artifactLocation"]["uri"], "docs/steps.md");
        assert_eq!(location["region"]["startLine"], 2);
    }

    #[test]
    fn test_sarif_rules_collection() {
        let reports = [
            report(
                "a.md",
                vec![
                    Finding::new(Rule::ListNumbering, 1, "m"),
                    Finding::new(Rule::CodeBlockIndent, 2, "m"),
                ],
            ),
            report("b.md", vec![Finding::new(Rule::ListNumbering, 3, "m")]),
        ];
        let sarif = generate_sarif(&reports).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&sarif).unwrap();

        let run = &parsed["runs"][0];
        assert_eq!(run["results"].as_array().unwrap().len(), 3);

        let rule_ids: Vec<&str> = run["tool"]["driver"]["rules"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(rule_ids, vec!["list-numbering", "code-block-indent"]);
    }
}
