//! Configuration types and structures.
//!
//! This module contains the typed model of a ReSpec configuration object.
//! Field names on the wire are ReSpec's recognized keys (`specStatus`,
//! `edDraftURI`, ...) since those names are the external interface; the
//! renderer ignores anything it does not recognize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Document maturity tag understood by the renderer.
///
/// The tag selects which boilerplate and legal text the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecStatus {
    /// Plain document without standards-track styling.
    #[serde(rename = "base")]
    Base,
    /// Unofficial draft (no working group endorsement).
    #[serde(rename = "unofficial")]
    Unofficial,
    /// Member submission.
    #[serde(rename = "Member-SUBM")]
    MemberSubmission,
    /// Editor's Draft.
    #[serde(rename = "ED")]
    EditorsDraft,
    /// First Public Working Draft.
    #[serde(rename = "FPWD")]
    FirstPublicWorkingDraft,
    /// Working Draft.
    #[serde(rename = "WD")]
    WorkingDraft,
    /// Candidate Recommendation.
    #[serde(rename = "CR")]
    CandidateRecommendation,
    /// Candidate Recommendation Draft.
    #[serde(rename = "CRD")]
    CandidateRecommendationDraft,
    /// Proposed Recommendation.
    #[serde(rename = "PR")]
    ProposedRecommendation,
    /// Proposed Edited Recommendation.
    #[serde(rename = "PER")]
    ProposedEditedRecommendation,
    /// Recommendation.
    #[serde(rename = "REC")]
    Recommendation,
    /// Group Note.
    #[serde(rename = "NOTE")]
    Note,
    /// Group Draft Note.
    #[serde(rename = "DNOTE")]
    DraftNote,
    /// Statement.
    #[serde(rename = "STMT")]
    Statement,
}

impl SpecStatus {
    /// The wire tag as the renderer expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecStatus::Base => "base",
            SpecStatus::Unofficial => "unofficial",
            SpecStatus::MemberSubmission => "Member-SUBM",
            SpecStatus::EditorsDraft => "ED",
            SpecStatus::FirstPublicWorkingDraft => "FPWD",
            SpecStatus::WorkingDraft => "WD",
            SpecStatus::CandidateRecommendation => "CR",
            SpecStatus::CandidateRecommendationDraft => "CRD",
            SpecStatus::ProposedRecommendation => "PR",
            SpecStatus::ProposedEditedRecommendation => "PER",
            SpecStatus::Recommendation => "REC",
            SpecStatus::Note => "NOTE",
            SpecStatus::DraftNote => "DNOTE",
            SpecStatus::Statement => "STMT",
        }
    }

    /// Parse a wire tag. Tags are case-sensitive, matching the renderer.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "base" => Some(SpecStatus::Base),
            "unofficial" => Some(SpecStatus::Unofficial),
            "Member-SUBM" => Some(SpecStatus::MemberSubmission),
            "ED" => Some(SpecStatus::EditorsDraft),
            "FPWD" => Some(SpecStatus::FirstPublicWorkingDraft),
            "WD" => Some(SpecStatus::WorkingDraft),
            "CR" => Some(SpecStatus::CandidateRecommendation),
            "CRD" => Some(SpecStatus::CandidateRecommendationDraft),
            "PR" => Some(SpecStatus::ProposedRecommendation),
            "PER" => Some(SpecStatus::ProposedEditedRecommendation),
            "REC" => Some(SpecStatus::Recommendation),
            "NOTE" => Some(SpecStatus::Note),
            "DNOTE" => Some(SpecStatus::DraftNote),
            "STMT" => Some(SpecStatus::Statement),
            _ => None,
        }
    }

    /// Whether this status is on the W3C Recommendation track.
    ///
    /// Rec-track documents are published under a working group, so the
    /// checker flags a missing `group` for these.
    pub fn is_rec_track(&self) -> bool {
        matches!(
            self,
            SpecStatus::FirstPublicWorkingDraft
                | SpecStatus::WorkingDraft
                | SpecStatus::CandidateRecommendation
                | SpecStatus::CandidateRecommendationDraft
                | SpecStatus::ProposedRecommendation
                | SpecStatus::ProposedEditedRecommendation
                | SpecStatus::Recommendation
        )
    }
}

impl std::fmt::Display for SpecStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An editor or author entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Display name.
    pub name: String,

    /// Affiliation shown next to the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// W3C account id, used for the editor's profile link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w3cid: Option<String>,

    /// Personal homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailto: Option<String>,

    /// Affiliation homepage.
    #[serde(rename = "companyURL", default, skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
}

impl Person {
    /// Create a person with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: None,
            w3cid: None,
            url: None,
            mailto: None,
            company_url: None,
        }
    }

    /// Set the affiliation.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the W3C account id.
    pub fn with_w3cid(mut self, w3cid: impl Into<String>) -> Self {
        self.w3cid = Some(w3cid.into());
        self
    }
}

/// A single link inside a [`LinkGroup`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Link text.
    pub value: String,
    /// Link target.
    pub href: String,
}

/// A labeled group of links rendered in the document header
/// (e.g. "Participate" with mailing list and issue tracker links).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkGroup {
    /// Group label.
    pub key: String,
    /// Links in display order.
    #[serde(default)]
    pub data: Vec<LinkEntry>,
}

/// A bibliography entry for citations not in the shared database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiblioEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Free-form publication date, e.g. "15 March 2024".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl BiblioEntry {
    /// An entry with neither title nor href renders as a bare key.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.href.is_none()
    }
}

/// The full configuration object handed to the renderer.
///
/// Only `specStatus` and `shortName` are required; everything else is
/// optional and omitted from output when absent, leaving the renderer's
/// own defaults in effect. The value is constructed once and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecConfig {
    /// Document maturity tag.
    pub spec_status: SpecStatus,

    /// Short identifier for the specification, used in published URLs.
    pub short_name: String,

    /// Publication date. Defaults to the render date when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<NaiveDate>,

    /// Link to the publicly available Editor's Draft.
    #[serde(rename = "edDraftURI", default, skip_serializing_if = "Option::is_none")]
    pub ed_draft_uri: Option<String>,

    /// Link to the latest published version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,

    /// Link to the web-platform-tests suite for this document.
    #[serde(
        rename = "testSuiteURI",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub test_suite_uri: Option<String>,

    /// Repository URL; enables source and issue links in the header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    /// Owning working group identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Public mailing list of the working group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wg_public_list: Option<String>,

    /// Render as a preview (adds a preview warning banner).
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_preview: bool,

    /// Highlight variables in algorithm blocks on hover.
    #[serde(default, skip_serializing_if = "is_false")]
    pub highlight_vars: bool,

    /// Document editors in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub editors: Vec<Person>,

    /// Additional authors in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Person>,

    /// Extra link groups for the document header.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_links: Vec<LinkGroup>,

    /// External glossaries to link terms against.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub xref: Vec<String>,

    /// Local bibliography entries, keyed by citation key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub local_biblio: BTreeMap<String, BiblioEntry>,

    /// Lint rule toggles, keyed by rule name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub lint: BTreeMap<String, bool>,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl SpecConfig {
    /// Create a minimal configuration with the two required fields.
    pub fn new(spec_status: SpecStatus, short_name: impl Into<String>) -> Self {
        Self {
            spec_status,
            short_name: short_name.into(),
            publish_date: None,
            ed_draft_uri: None,
            latest_version: None,
            test_suite_uri: None,
            github: None,
            group: None,
            wg_public_list: None,
            is_preview: false,
            highlight_vars: false,
            editors: Vec::new(),
            authors: Vec::new(),
            other_links: Vec::new(),
            xref: Vec::new(),
            local_biblio: BTreeMap::new(),
            lint: BTreeMap::new(),
        }
    }

    /// All URL-valued fields with their key names, for structural checks.
    pub fn url_fields(&self) -> Vec<(String, &str)> {
        let mut urls = Vec::new();
        if let Some(ref u) = self.ed_draft_uri {
            urls.push(("edDraftURI".to_string(), u.as_str()));
        }
        if let Some(ref u) = self.latest_version {
            urls.push(("latestVersion".to_string(), u.as_str()));
        }
        if let Some(ref u) = self.test_suite_uri {
            urls.push(("testSuiteURI".to_string(), u.as_str()));
        }
        if let Some(ref u) = self.github {
            urls.push(("github".to_string(), u.as_str()));
        }
        for (gi, group) in self.other_links.iter().enumerate() {
            for (li, link) in group.data.iter().enumerate() {
                urls.push((
                    format!("otherLinks[{}].data[{}].href", gi, li),
                    link.href.as_str(),
                ));
            }
        }
        for (key, entry) in &self.local_biblio {
            if let Some(ref href) = entry.href {
                urls.push((format!("localBiblio.{}.href", key), href.as_str()));
            }
        }
        urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_config_serializes_to_required_fields_only() {
        let config = SpecConfig::new(SpecStatus::Unofficial, "webrtc-icecontroller");
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "specStatus": "unofficial",
                "shortName": "webrtc-icecontroller"
            })
        );
    }

    #[test]
    fn wire_keys_match_renderer_spelling() {
        let mut config = SpecConfig::new(SpecStatus::EditorsDraft, "example");
        config.ed_draft_uri = Some("https://w3c.github.io/example/".to_string());
        config.test_suite_uri = Some("https://wpt.fyi/example/".to_string());
        config.wg_public_list = Some("public-example".to_string());
        config.editors = vec![
            Person::new("Ada")
                .with_company("Example Org")
                .with_w3cid("1234"),
        ];

        let value = serde_json::to_value(&config).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("edDraftURI"));
        assert!(obj.contains_key("testSuiteURI"));
        assert!(obj.contains_key("wgPublicList"));
        assert_eq!(value["editors"][0]["w3cid"], "1234");
    }

    #[test]
    fn missing_required_fields_fail_to_parse() {
        let err = serde_json::from_value::<SpecConfig>(json!({})).unwrap_err();
        assert!(err.to_string().contains("specStatus"));

        let err = serde_json::from_value::<SpecConfig>(json!({ "specStatus": "ED" })).unwrap_err();
        assert!(err.to_string().contains("shortName"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: SpecConfig = serde_json::from_value(json!({
            "specStatus": "WD",
            "shortName": "example",
            "notARealKey": 42
        }))
        .unwrap();
        assert_eq!(config.short_name, "example");
    }

    #[test]
    fn full_config_round_trips() {
        let mut config = SpecConfig::new(SpecStatus::Unofficial, "webrtc-icecontroller");
        config.latest_version = Some("https://sam-vi.github.io/webrtc-icecontroller/".to_string());
        config.github = Some("https://github.com/sam-vi/webrtc-icecontroller".to_string());
        config.group = Some("webrtc".to_string());
        config.wg_public_list = Some("public-webrtc".to_string());
        config.is_preview = true;
        config.highlight_vars = true;
        config.editors = vec![
            Person::new("Sameer Vijaykar")
                .with_company("Google")
                .with_w3cid("141805"),
        ];
        config.other_links = vec![LinkGroup {
            key: "Participate".to_string(),
            data: vec![LinkEntry {
                value: "Mailing list".to_string(),
                href: "https://lists.w3.org/Archives/Public/public-webrtc/".to_string(),
            }],
        }];
        config.xref = vec!["webrtc".to_string(), "html".to_string()];
        config.lint.insert("no-unused-vars".to_string(), true);

        let serialized = serde_json::to_string(&config).unwrap();
        let parsed: SpecConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn example_scenario_loads_as_expected() {
        let config: SpecConfig = serde_json::from_value(json!({
            "specStatus": "unofficial",
            "shortName": "webrtc-icecontroller",
            "editors": [{ "name": "A", "company": "B", "w3cid": "1" }]
        }))
        .unwrap();
        assert_eq!(config.short_name, "webrtc-icecontroller");
        assert_eq!(config.editors.len(), 1);
        assert_eq!(config.editors[0].name, "A");
    }

    #[test]
    fn status_tags_are_case_sensitive() {
        assert_eq!(SpecStatus::from_str("ED"), Some(SpecStatus::EditorsDraft));
        assert_eq!(SpecStatus::from_str("ed"), None);
        assert_eq!(
            SpecStatus::from_str("unofficial"),
            Some(SpecStatus::Unofficial)
        );
        assert_eq!(SpecStatus::from_str("UNOFFICIAL"), None);
    }

    #[test]
    fn rec_track_statuses() {
        assert!(SpecStatus::WorkingDraft.is_rec_track());
        assert!(SpecStatus::Recommendation.is_rec_track());
        assert!(!SpecStatus::Unofficial.is_rec_track());
        assert!(!SpecStatus::Note.is_rec_track());
        assert!(!SpecStatus::EditorsDraft.is_rec_track());
    }

    #[test]
    fn false_booleans_are_omitted() {
        let mut config = SpecConfig::new(SpecStatus::Base, "example");
        config.is_preview = false;
        let value = serde_json::to_value(&config).unwrap();
        assert!(value.get("isPreview").is_none());

        config.is_preview = true;
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["isPreview"], true);
    }
}
