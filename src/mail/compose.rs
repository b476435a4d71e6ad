//! Compose draft and its field validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::address;

/// The in-progress, not-yet-sent message. Staged by the UI and the AI
/// drafter, handed to the gateway for sending; never persisted directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComposeDraft {
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub cc: String,
    #[serde(default)]
    pub bcc: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

/// Outcome of one validation pass, keyed by field name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

/// Check every field independently and collect all applicable errors;
/// no rule short-circuits another.
///
/// The same routine backs inline UI field hints and the gate before the
/// network send, so the error keys must stay identical at both call sites.
pub fn validate_draft(draft: &ComposeDraft) -> ValidationResult {
    let mut errors = BTreeMap::new();

    let to = draft.to.trim();
    if to.is_empty() || !address::is_valid_address(to) {
        errors.insert(
            "to".to_string(),
            "To field must be a valid email address".to_string(),
        );
    }
    if !address::is_valid_address_list(&draft.cc) {
        errors.insert(
            "cc".to_string(),
            "CC must contain valid email addresses separated by commas".to_string(),
        );
    }
    if !address::is_valid_address_list(&draft.bcc) {
        errors.insert(
            "bcc".to_string(),
            "BCC must contain valid email addresses separated by commas".to_string(),
        );
    }
    if draft.subject.trim().is_empty() {
        errors.insert("subject".to_string(), "Subject is required".to_string());
    }
    if draft.body.trim().is_empty() {
        errors.insert("body".to_string(), "Body is required".to_string());
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ComposeDraft {
        ComposeDraft {
            to: "client@example.com".to_string(),
            cc: String::new(),
            bcc: String::new(),
            subject: "Quarterly check-in".to_string(),
            body: "Hi, just checking in on the rollout.".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let result = validate_draft(&valid_draft());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_empty_draft_collects_required_field_errors() {
        let result = validate_draft(&ComposeDraft::default());
        assert!(!result.is_valid);
        let keys: Vec<&str> = result.errors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["body", "subject", "to"]);
    }

    #[test]
    fn test_optional_lists_are_validated_when_present() {
        let mut draft = valid_draft();
        draft.cc = "a@b.com, nope".to_string();
        draft.bcc = "c@d.com,".to_string();
        let result = validate_draft(&draft);
        assert!(!result.is_valid);
        assert!(result.errors.contains_key("cc"));
        assert!(result.errors.contains_key("bcc"));
        assert!(!result.errors.contains_key("to"));
    }

    #[test]
    fn test_whitespace_only_fields_are_empty() {
        let mut draft = valid_draft();
        draft.subject = "   ".to_string();
        draft.body = "\n\t".to_string();
        let result = validate_draft(&draft);
        assert!(result.errors.contains_key("subject"));
        assert!(result.errors.contains_key("body"));
    }

    #[test]
    fn test_invalid_to_address() {
        let mut draft = valid_draft();
        draft.to = "not-an-address".to_string();
        let result = validate_draft(&draft);
        assert_eq!(
            result.errors.get("to").map(String::as_str),
            Some("To field must be a valid email address")
        );
    }

    #[test]
    fn test_to_is_trimmed_before_checking() {
        let mut draft = valid_draft();
        draft.to = "  client@example.com  ".to_string();
        assert!(validate_draft(&draft).is_valid);
    }
}
