//! Write-time validation
//!
//! Validation is all-or-nothing and deterministic: every violation in a
//! payload is collected and reported together, and nothing is applied
//! when any field fails. Query-side filtering never validates; these
//! rules guard mutations only.

use regex::Regex;

use crate::model::{PartnerDraft, PartnerPatch};
use crate::query::normalize;

use super::errors::FieldViolation;

/// Bounds for the rating score
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Conservative email shape: something@something.something
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Validates partner write payloads
pub struct PartnerValidator {
    email: Regex,
}

impl PartnerValidator {
    pub fn new() -> Self {
        Self {
            email: Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"),
        }
    }

    /// Checks a create payload.
    ///
    /// Required: first name, last name, company, profession — present
    /// and non-blank after trim. Rating, when given, must sit in
    /// [1, 5]. Email, when non-empty, must look like an address.
    pub fn validate_draft(&self, draft: &PartnerDraft) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        check_required("firstName", draft.first_name.as_deref(), &mut violations);
        check_required("lastName", draft.last_name.as_deref(), &mut violations);
        check_required("company", draft.company.as_deref(), &mut violations);
        check_required("profession", draft.profession.as_deref(), &mut violations);

        if let Some(rating) = draft.rating {
            self.check_rating(rating, &mut violations);
        }
        if let Some(email) = draft.email.as_deref() {
            self.check_email(email, &mut violations);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Checks an update payload: only present fields are judged, by the
    /// same rules as a draft.
    pub fn validate_patch(&self, patch: &PartnerPatch) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        check_not_blank("firstName", patch.first_name.as_deref(), &mut violations);
        check_not_blank("lastName", patch.last_name.as_deref(), &mut violations);
        check_not_blank("company", patch.company.as_deref(), &mut violations);
        check_not_blank("profession", patch.profession.as_deref(), &mut violations);

        if let Some(rating) = patch.rating {
            self.check_rating(rating, &mut violations);
        }
        if let Some(email) = patch.email.as_deref() {
            self.check_email(email, &mut violations);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    fn check_rating(&self, rating: u8, violations: &mut Vec<FieldViolation>) {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            violations.push(FieldViolation::new(
                "rating",
                format!("must be between {} and {}", MIN_RATING, MAX_RATING),
            ));
        }
    }

    fn check_email(&self, email: &str, violations: &mut Vec<FieldViolation>) {
        // Empty clears the address; only non-empty values must parse
        if !email.is_empty() && !self.email.is_match(email) {
            violations.push(FieldViolation::new("email", "is not a valid email address"));
        }
    }
}

impl Default for PartnerValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Required on create: missing and blank are both violations
fn check_required(field: &str, value: Option<&str>, violations: &mut Vec<FieldViolation>) {
    match value {
        None => violations.push(FieldViolation::new(field, "is required")),
        Some(v) if v.trim().is_empty() => {
            violations.push(FieldViolation::new(field, "must not be blank"))
        }
        Some(_) => {}
    }
}

/// Patch rule: absent is fine, present-but-blank is not
fn check_not_blank(field: &str, value: Option<&str>, violations: &mut Vec<FieldViolation>) {
    if let Some(v) = value {
        if v.trim().is_empty() {
            violations.push(FieldViolation::new(field, "must not be blank"));
        }
    }
}

/// Canonicalizes a classification list: trims entries, drops empties,
/// and deduplicates case-insensitively keeping the first-seen casing.
pub fn canonical_classifications(tags: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut result: Vec<String> = Vec::new();

    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            continue;
        }

        let folded = normalize(trimmed);
        if seen.contains(&folded) {
            continue;
        }

        seen.push(folded);
        result.push(trimmed.to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> PartnerDraft {
        PartnerDraft {
            first_name: Some("Grace".to_string()),
            last_name: Some("Hopper".to_string()),
            company: Some("Navy Systems".to_string()),
            profession: Some("Engineer".to_string()),
            email: Some("grace@navy.example".to_string()),
            phone: Some("555-0102".to_string()),
            rating: Some(5),
            classifications: vec!["Tech".to_string()],
            relations: Vec::new(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let validator = PartnerValidator::new();
        assert!(validator.validate_draft(&full_draft()).is_ok());
    }

    #[test]
    fn test_missing_required_fields_all_reported() {
        let validator = PartnerValidator::new();
        let draft = PartnerDraft::default();

        let violations = validator.validate_draft(&draft).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();

        assert_eq!(fields, vec!["firstName", "lastName", "company", "profession"]);
    }

    #[test]
    fn test_blank_required_field_rejected() {
        let validator = PartnerValidator::new();
        let mut draft = full_draft();
        draft.company = Some("   ".to_string());

        let violations = validator.validate_draft(&draft).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "company");
    }

    #[test]
    fn test_rating_bounds() {
        let validator = PartnerValidator::new();

        for bad in [0u8, 6, 200] {
            let mut draft = full_draft();
            draft.rating = Some(bad);
            let violations = validator.validate_draft(&draft).unwrap_err();
            assert_eq!(violations[0].field, "rating", "rating {} must fail", bad);
        }

        for good in [1u8, 3, 5] {
            let mut draft = full_draft();
            draft.rating = Some(good);
            assert!(validator.validate_draft(&draft).is_ok(), "rating {} must pass", good);
        }
    }

    #[test]
    fn test_omitted_rating_is_fine() {
        let validator = PartnerValidator::new();
        let mut draft = full_draft();
        draft.rating = None;

        assert!(validator.validate_draft(&draft).is_ok());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let validator = PartnerValidator::new();

        for bad in ["not-an-email", "a@b", "a b@c.d", "@missing.local"] {
            let mut draft = full_draft();
            draft.email = Some(bad.to_string());
            let violations = validator.validate_draft(&draft).unwrap_err();
            assert_eq!(violations[0].field, "email", "email {:?} must fail", bad);
        }
    }

    #[test]
    fn test_empty_email_allowed() {
        let validator = PartnerValidator::new();
        let mut draft = full_draft();
        draft.email = Some(String::new());

        assert!(validator.validate_draft(&draft).is_ok());

        draft.email = None;
        assert!(validator.validate_draft(&draft).is_ok());
    }

    #[test]
    fn test_patch_allows_absent_fields() {
        let validator = PartnerValidator::new();
        assert!(validator.validate_patch(&PartnerPatch::default()).is_ok());
    }

    #[test]
    fn test_patch_rejects_blanking_required_field() {
        let validator = PartnerValidator::new();
        let patch = PartnerPatch {
            company: Some("  ".to_string()),
            ..PartnerPatch::default()
        };

        let violations = validator.validate_patch(&patch).unwrap_err();
        assert_eq!(violations[0].field, "company");
    }

    #[test]
    fn test_patch_collects_multiple_violations() {
        let validator = PartnerValidator::new();
        let patch = PartnerPatch {
            company: Some(String::new()),
            rating: Some(9),
            email: Some("nope".to_string()),
            ..PartnerPatch::default()
        };

        let violations = validator.validate_patch(&patch).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_classifications_trim_and_dedup() {
        let tags = vec![
            "  Tech ".to_string(),
            "tech".to_string(),
            "TECH".to_string(),
            "Design".to_string(),
            "   ".to_string(),
        ];

        let canonical = canonical_classifications(&tags);
        assert_eq!(canonical, vec!["Tech", "Design"]);
    }

    #[test]
    fn test_classifications_keep_first_seen_casing() {
        let tags = vec!["consulting".to_string(), "Consulting".to_string()];
        assert_eq!(canonical_classifications(&tags), vec!["consulting"]);
    }
}
