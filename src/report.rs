//! Renders check results for humans and for workflow outputs
//!
//! The comment body mirrors what the triage bot posts on an issue; the
//! output strings are the comma-joined machine-readable forms consumed by
//! downstream workflow steps.

use crate::check::CheckResult;

/// Shown in place of a latest version the registry did not tag
const UNKNOWN_LATEST: &str = "null";

/// Builds the comment body for a check that flagged problems.
///
/// Returns `None` when nothing is missing or outdated.
pub fn comment_body(result: &CheckResult) -> Option<String> {
    let mut sections = Vec::new();

    if !result.missing.is_empty() {
        sections.push(missing_section(result));
    }

    if !result.outdated.is_empty() {
        sections.push(outdated_section(result));
    }

    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n\n"))
    }
}

fn missing_section(result: &CheckResult) -> String {
    let names = result
        .missing
        .iter()
        .map(|name| format!("- `{}`", name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Couldn't find version numbers for the following packages in the issue:\n\
         {}\n\n\
         Can you update the issue to include version numbers for those packages? \
         The version numbers must match the format 1.2.3.",
        names
    )
}

fn outdated_section(result: &CheckResult) -> String {
    let entries = result
        .outdated
        .iter()
        .map(|(name, latest)| {
            let found = result
                .found
                .get(name)
                .map(String::as_str)
                .unwrap_or_default();
            format!(
                "- `{}` (found: `{}`, latest: `{}`)",
                name,
                found,
                latest.as_deref().unwrap_or(UNKNOWN_LATEST)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "The versions mentioned in the issue for the following packages differ from the \
         latest versions on npm:\n\
         {}\n\n\
         Can you verify that the issue still exists after upgrading to the latest versions \
         of these packages?",
        entries
    )
}

/// `name@version` pairs for the `found` output
pub fn found_output(result: &CheckResult) -> String {
    result
        .found
        .iter()
        .map(|(name, version)| format!("{}@{}", name, version))
        .collect::<Vec<_>>()
        .join(",")
}

/// `name@latest` pairs for the `outdated` output
pub fn outdated_output(result: &CheckResult) -> String {
    result
        .outdated
        .iter()
        .map(|(name, latest)| {
            format!("{}@{}", name, latest.as_deref().unwrap_or(UNKNOWN_LATEST))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Bare names for the `missing` output
pub fn missing_output(result: &CheckResult) -> String {
    result
        .missing
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(",")
}
