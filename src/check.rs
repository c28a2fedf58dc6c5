//! Structural checks for a loaded configuration.
//!
//! Construction is deliberately validation-free: the renderer copes with
//! almost anything, and absent fields just fall back to its defaults.
//! These checks are a separate, opt-in pass for catching the mistakes the
//! renderer swallows silently (a typo'd lint rule, a duplicated xref key,
//! an href that is not a URL).

use crate::config::SpecConfig;
use crate::error::{CheckFinding, Severity};
use std::collections::HashSet;
use url::Url;

/// Lint rules the renderer understands. Anything else is silently ignored
/// there, which is exactly why it is worth a warning here.
pub const KNOWN_LINT_RULES: [&str; 12] = [
    "a11y",
    "check-charset",
    "check-internal-slots",
    "check-punctuation",
    "local-refs-exist",
    "no-captionless-tables",
    "no-headingless-sections",
    "no-http-props",
    "no-unused-vars",
    "privsec-section",
    "required-sections",
    "wpt-tests-exist",
];

/// Run all structural checks and collect the findings.
pub fn check_config(config: &SpecConfig) -> Vec<CheckFinding> {
    let mut findings = Vec::new();

    check_required_strings(config, &mut findings);
    check_urls(config, &mut findings);
    check_xref(config, &mut findings);
    check_lint_rules(config, &mut findings);
    check_group(config, &mut findings);
    check_biblio(config, &mut findings);

    findings
}

/// Whether any finding is an error (as opposed to a warning).
pub fn has_errors(findings: &[CheckFinding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}

fn check_required_strings(config: &SpecConfig, findings: &mut Vec<CheckFinding>) {
    if config.short_name.trim().is_empty() {
        findings.push(CheckFinding::empty_field("shortName"));
    }

    for (i, person) in config.editors.iter().enumerate() {
        if person.name.trim().is_empty() {
            findings.push(CheckFinding::empty_field(&format!("editors[{}].name", i)));
        }
    }
    for (i, person) in config.authors.iter().enumerate() {
        if person.name.trim().is_empty() {
            findings.push(CheckFinding::empty_field(&format!("authors[{}].name", i)));
        }
    }

    for (gi, group) in config.other_links.iter().enumerate() {
        if group.key.trim().is_empty() {
            findings.push(CheckFinding::empty_field(&format!("otherLinks[{}].key", gi)));
        }
        for (li, link) in group.data.iter().enumerate() {
            if link.value.trim().is_empty() {
                findings.push(CheckFinding::empty_field(&format!(
                    "otherLinks[{}].data[{}].value",
                    gi, li
                )));
            }
        }
    }
}

fn check_urls(config: &SpecConfig, findings: &mut Vec<CheckFinding>) {
    for (field, value) in config.url_fields() {
        if Url::parse(value).is_err() {
            findings.push(CheckFinding::invalid_url(&field, value));
        }
    }
}

fn check_xref(config: &SpecConfig, findings: &mut Vec<CheckFinding>) {
    let mut seen = HashSet::new();
    for key in &config.xref {
        if !seen.insert(key.as_str()) {
            findings.push(CheckFinding::duplicate_xref(key));
        }
    }
}

fn check_lint_rules(config: &SpecConfig, findings: &mut Vec<CheckFinding>) {
    for rule in config.lint.keys() {
        if !KNOWN_LINT_RULES.contains(&rule.as_str()) {
            findings.push(CheckFinding::unknown_lint_rule(rule));
        }
    }
}

fn check_group(config: &SpecConfig, findings: &mut Vec<CheckFinding>) {
    if config.spec_status.is_rec_track() && config.group.is_none() {
        findings.push(CheckFinding::missing_group(config.spec_status.as_str()));
    }
}

fn check_biblio(config: &SpecConfig, findings: &mut Vec<CheckFinding>) {
    for (key, entry) in &config.local_biblio {
        if entry.is_empty() {
            findings.push(CheckFinding::empty_biblio_entry(key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BiblioEntry, LinkEntry, LinkGroup, Person, SpecStatus};
    use crate::error::CheckCode;

    fn clean_config() -> SpecConfig {
        let mut config = SpecConfig::new(SpecStatus::Unofficial, "webrtc-icecontroller");
        config.latest_version = Some("https://sam-vi.github.io/webrtc-icecontroller/".to_string());
        config.github = Some("https://github.com/sam-vi/webrtc-icecontroller".to_string());
        config.group = Some("webrtc".to_string());
        config.editors = vec![Person::new("Sameer Vijaykar").with_company("Google")];
        config.xref = vec!["webrtc".to_string(), "html".to_string(), "dom".to_string()];
        config.lint.insert("no-unused-vars".to_string(), true);
        config
    }

    #[test]
    fn clean_config_has_no_findings() {
        assert!(check_config(&clean_config()).is_empty());
    }

    #[test]
    fn empty_short_name_is_an_error() {
        let mut config = clean_config();
        config.short_name = "  ".to_string();
        let findings = check_config(&config);
        assert!(findings.iter().any(|f| f.code == CheckCode::EmptyField
            && f.field.as_deref() == Some("shortName")));
        assert!(has_errors(&findings));
    }

    #[test]
    fn empty_editor_name_is_an_error() {
        let mut config = clean_config();
        config.editors.push(Person::new(""));
        let findings = check_config(&config);
        assert!(findings.iter().any(|f| f.code == CheckCode::EmptyField
            && f.field.as_deref() == Some("editors[1].name")));
    }

    #[test]
    fn bad_href_is_an_error() {
        let mut config = clean_config();
        config.other_links = vec![LinkGroup {
            key: "Participate".to_string(),
            data: vec![LinkEntry {
                value: "Mailing list".to_string(),
                href: "not a url".to_string(),
            }],
        }];
        let findings = check_config(&config);
        assert!(findings.iter().any(|f| f.code == CheckCode::InvalidUrl
            && f.field.as_deref() == Some("otherLinks[0].data[0].href")));
    }

    #[test]
    fn duplicate_xref_is_an_error() {
        let mut config = clean_config();
        config.xref.push("webrtc".to_string());
        let findings = check_config(&config);
        assert!(findings.iter().any(|f| f.code == CheckCode::DuplicateXref));
        assert!(has_errors(&findings));
    }

    #[test]
    fn unknown_lint_rule_is_a_warning() {
        let mut config = clean_config();
        config.lint.insert("no-unusedvars".to_string(), true);
        let findings = check_config(&config);
        let finding = findings
            .iter()
            .find(|f| f.code == CheckCode::UnknownLintRule)
            .unwrap();
        assert_eq!(finding.severity, Severity::Warning);
        assert!(!has_errors(&findings));
    }

    #[test]
    fn rec_track_without_group_is_a_warning() {
        let mut config = clean_config();
        config.spec_status = SpecStatus::WorkingDraft;
        config.group = None;
        let findings = check_config(&config);
        assert!(findings.iter().any(|f| f.code == CheckCode::MissingGroup));

        // Unofficial documents need no group
        config.spec_status = SpecStatus::Unofficial;
        assert!(check_config(&config).is_empty());
    }

    #[test]
    fn empty_biblio_entry_is_a_warning() {
        let mut config = clean_config();
        config
            .local_biblio
            .insert("ICE-HARNESS".to_string(), BiblioEntry::default());
        let findings = check_config(&config);
        let finding = findings
            .iter()
            .find(|f| f.code == CheckCode::EmptyBiblioEntry)
            .unwrap();
        assert_eq!(finding.field.as_deref(), Some("localBiblio.ICE-HARNESS"));
        assert_eq!(finding.severity, Severity::Warning);
    }
}
