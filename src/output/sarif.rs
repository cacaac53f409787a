//! SARIF 2.1.0 output formatter.
//!
//! One run, one result per diagnostic. Rule descriptors come from the rule
//! catalogue so `shortDescription` and `help` match `explain`.

use crate::finding::{Diagnostic, Severity, ValidationReport};
use crate::rules;
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::{BTreeMap, HashMap};

pub fn format(report: &ValidationReport) -> String {
    // Unique rule ids, sorted for stable indices.
    let mut seen: BTreeMap<&str, &Diagnostic> = BTreeMap::new();
    for d in &report.diagnostics {
        seen.entry(d.rule_id.as_str()).or_insert(d);
    }

    let rule_index: HashMap<&str, i64> = seen
        .keys()
        .enumerate()
        .map(|(i, id)| (*id, i as i64))
        .collect();

    let rule_descriptors: Vec<ReportingDescriptor> = seen
        .iter()
        .map(|(id, first)| {
            let mut rule = ReportingDescriptor::builder().id(id.to_string()).build();
            let (summary, remediation) = match rules::find_rule(id) {
                Some(meta) => (meta.summary.to_string(), Some(meta.remediation)),
                None => (first.message.clone(), None),
            };
            rule.short_description = Some(MultiformatMessageString::builder().text(summary).build());
            if let Some(rem) = remediation {
                rule.help = Some(
                    MultiformatMessageString::builder()
                        .text(rem.to_string())
                        .build(),
                );
            }
            rule
        })
        .collect();

    let results: Vec<SarifResult> = report
        .diagnostics
        .iter()
        .map(|d| {
            let level = match d.severity {
                Severity::Error => ResultLevel::Error,
                Severity::Warning => ResultLevel::Warning,
            };

            let mut result = SarifResult::builder()
                .message(Message::builder().text(d.message.clone()).build())
                .build();

            result.rule_id = Some(d.rule_id.clone());
            result.level = Some(level);
            result.rule_index = rule_index.get(d.rule_id.as_str()).copied();

            if let Some(ref file) = d.file {
                let uri = file.to_string_lossy().replace('\\', "/");

                let mut location = Location::builder().build();
                let mut physical = PhysicalLocation::builder().build();
                physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());
                location.physical_location = Some(physical);
                result.locations = Some(vec![location]);
            }

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("oxidized-skill-lint")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rule_descriptors)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
