//! Line scanner for package version mentions
//!
//! Issue bodies mention versions in wildly different shapes: version tables,
//! pasted `package.json` fragments, `name@version` inline mentions,
//! checklists. The scanner is a best-effort heuristic over lines and
//! whitespace-separated tokens rather than a Markdown parser; false negatives
//! are acceptable, and version candidates are validated against a strict
//! numeric triplet before they count as found.

use indexmap::{IndexMap, IndexSet};
use regex::Regex;

use crate::scanner::types::Classification;

/// Scans a text body for package names followed by version numbers
pub struct Scanner {
    /// Matches a normalized version candidate: `1.2.3`, trailing
    /// pre-release/build text tolerated
    version_re: Regex,
    /// Matches an unchecked checklist item, capturing the referenced name:
    /// `- [ ] left-pad`
    unchecked_item_re: Regex,
    /// Runs of table and JSON punctuation separating a name from its version
    separator_re: Regex,
    /// `@` gluing a name to its version, as in `react@17.0.2`. Only an `@`
    /// preceded by a word character splits, so scoped names like
    /// `@types/node` stay intact.
    at_version_re: Regex,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new(r"^\d+\.\d+\.\d+").unwrap(),
            unchecked_item_re: Regex::new(r"^[-*]\s+\[ \]\s+(.+)$").unwrap(),
            separator_re: Regex::new(r#"[|\s":,]+"#).unwrap(),
            at_version_re: Regex::new(r"\b@").unwrap(),
        }
    }

    /// Classifies every tracked package as found or missing.
    ///
    /// `missing` starts out holding all required packages; a package leaves
    /// it the moment a valid version is recorded for it. Optional packages
    /// enter `missing` only when they are mentioned without a usable version.
    /// Lines are scanned top to bottom and valid finds are sticky: a later
    /// line with an invalid version token never evicts an earlier find,
    /// while a later valid version overwrites it.
    pub fn classify(
        &self,
        body: &str,
        optional_packages: &[String],
        required_packages: &[String],
    ) -> Classification {
        let mut found: IndexMap<String, String> = IndexMap::new();
        let mut missing: IndexSet<String> = required_packages.iter().cloned().collect();

        for line in body.lines() {
            for package in required_packages.iter().chain(optional_packages) {
                // An unchecked checklist item naming exactly this package is
                // an explicit "not applicable" marker
                if self.is_opted_out(line, package) {
                    continue;
                }

                if !line.contains(package.as_str()) {
                    continue;
                }

                let tokens = self.tokenize(line);

                for (i, token) in tokens.iter().enumerate() {
                    if token != package {
                        continue;
                    }

                    // The token right after the name is the version candidate.
                    // A name at the end of the line has none and counts as an
                    // invalid mention.
                    match tokens.get(i + 1).map(|t| normalize_version(t)) {
                        Some(version) if self.version_re.is_match(version) => {
                            found.insert(package.clone(), version.to_string());
                            missing.shift_remove(package);
                            break;
                        }
                        _ => {
                            if !found.contains_key(package) {
                                missing.insert(package.clone());
                            }
                        }
                    }
                }
            }
        }

        Classification { found, missing }
    }

    fn is_opted_out(&self, line: &str, package: &str) -> bool {
        self.unchecked_item_re
            .captures(line.trim())
            .is_some_and(|caps| &caps[1] == package)
    }

    /// Normalizes a line into name/version tokens: collapse the punctuation
    /// that version tables and `package.json` fragments put between a name
    /// and its version, then split `name@version` forms at the `@`.
    fn tokenize(&self, line: &str) -> Vec<String> {
        let collapsed = self.separator_re.replace_all(line, " ");
        let split = self.at_version_re.replace_all(&collapsed, " ");
        split.split_whitespace().map(str::to_string).collect()
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips one leading `v`, then one leading semver sigil (`^` or `~`)
fn normalize_version(token: &str) -> &str {
    let token = token.strip_prefix('v').unwrap_or(token);
    token.strip_prefix(['^', '~']).unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[rstest]
    #[case("| lodash | 4.17.20 |", "lodash", "4.17.20")]
    #[case("react@^17.0.2", "react", "17.0.2")]
    #[case("react@17.0.2", "react", "17.0.2")]
    #[case("prettier v2.3.1", "prettier", "2.3.1")]
    #[case("typescript: ~4.4.2", "typescript", "4.4.2")]
    #[case(r#"    "lodash": "4.17.20","#, "lodash", "4.17.20")]
    #[case("@types/node 18.11.9", "@types/node", "18.11.9")]
    #[case("@types/node@18.11.9", "@types/node", "18.11.9")]
    #[case("rollup 2.60.0-beta.1", "rollup", "2.60.0-beta.1")]
    fn classify_extracts_version_from_line(
        #[case] line: &str,
        #[case] package: &str,
        #[case] version: &str,
    ) {
        let scanner = Scanner::new();
        let result = scanner.classify(line, &[], &names(&[package]));

        assert_eq!(result.found.get(package), Some(&version.to_string()));
        assert!(result.missing.is_empty());
    }

    #[rstest]
    // Two-part versions fail the numeric triplet
    #[case("lodash 4.17")]
    // Range sigils on the wrong side of the v prefix
    #[case("lodash ^v4.17.20")]
    // Words are not versions
    #[case("lodash latest")]
    // Name at the end of the line has no version candidate
    #[case("lodash")]
    fn classify_marks_invalid_mentions_missing(#[case] line: &str) {
        let scanner = Scanner::new();
        let result = scanner.classify(line, &names(&["lodash"]), &[]);

        assert!(result.found.is_empty());
        assert!(result.missing.contains("lodash"));
    }

    #[test]
    fn classify_marks_unmentioned_required_packages_missing() {
        let scanner = Scanner::new();
        let result = scanner.classify("nothing relevant here", &[], &names(&["left-pad"]));

        assert!(result.found.is_empty());
        assert!(result.missing.contains("left-pad"));
    }

    #[test]
    fn classify_ignores_unmentioned_optional_packages() {
        let scanner = Scanner::new();
        let result = scanner.classify("nothing relevant here", &names(&["left-pad"]), &[]);

        assert!(result.found.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn classify_skips_unchecked_checklist_item() {
        let scanner = Scanner::new();
        let result = scanner.classify("- [ ] left-pad", &[], &names(&["left-pad"]));

        // The opt-out suppresses the mention, but a required package still
        // defaults to missing until proven found
        assert!(result.found.is_empty());
        assert!(result.missing.contains("left-pad"));
    }

    #[test]
    fn classify_skips_star_checklist_item_for_optional_package() {
        let scanner = Scanner::new();
        let result = scanner.classify("* [ ] left-pad", &names(&["left-pad"]), &[]);

        assert!(result.found.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn classify_does_not_skip_checklist_item_for_other_package() {
        let scanner = Scanner::new();
        let body = "- [ ] react-dom\nreact 17.0.2";
        let result = scanner.classify(body, &[], &names(&["react"]));

        assert_eq!(result.found.get("react"), Some(&"17.0.2".to_string()));
    }

    #[test]
    fn classify_keeps_valid_find_over_later_invalid_mention() {
        let scanner = Scanner::new();
        let body = "lodash 4.17.20\nlodash latest";
        let result = scanner.classify(body, &[], &names(&["lodash"]));

        assert_eq!(result.found.get("lodash"), Some(&"4.17.20".to_string()));
        assert!(result.missing.is_empty());
    }

    #[test]
    fn classify_last_valid_version_wins() {
        let scanner = Scanner::new();
        let body = "lodash 4.17.20\nlodash 4.17.21";
        let result = scanner.classify(body, &[], &names(&["lodash"]));

        assert_eq!(result.found.get("lodash"), Some(&"4.17.21".to_string()));
    }

    #[test]
    fn classify_clears_missing_when_valid_version_follows_invalid_mention() {
        let scanner = Scanner::new();
        let body = "lodash latest\nlodash 4.17.21";
        let result = scanner.classify(body, &[], &names(&["lodash"]));

        assert_eq!(result.found.get("lodash"), Some(&"4.17.21".to_string()));
        assert!(result.missing.is_empty());
    }

    #[test]
    fn classify_scans_required_and_optional_packages() {
        let scanner = Scanner::new();
        let body = "| lodash | 4.17.20 |\n| react | 17.0.2 |";
        let result = scanner.classify(body, &names(&["react"]), &names(&["lodash", "left-pad"]));

        assert_eq!(result.found.get("lodash"), Some(&"4.17.20".to_string()));
        assert_eq!(result.found.get("react"), Some(&"17.0.2".to_string()));
        assert!(result.missing.contains("left-pad"));
        assert_eq!(result.missing.len(), 1);
    }

    #[test]
    fn classify_is_idempotent() {
        let scanner = Scanner::new();
        let body = "| lodash | 4.17.20 |\nreact@latest\n- [ ] left-pad";
        let packages = names(&["lodash", "react", "left-pad"]);

        let first = scanner.classify(body, &[], &packages);
        let second = scanner.classify(body, &[], &packages);

        assert_eq!(first, second);
    }
}
