//! Explicit field validation for incoming student payloads.

use crate::error::FieldError;
use crate::model::{StudentDraft, StudentPayload};
use regex::Regex;
use std::sync::OnceLock;

const MIN_AGE: i32 = 16;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

/// Check a payload against the field rules, producing a validated draft or
/// the full list of violations (all fields are checked, not just the first).
pub fn validate(payload: StudentPayload) -> Result<StudentDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = match payload.name {
        Some(n) if !n.is_empty() => Some(n),
        _ => {
            errors.push(FieldError {
                field: "name",
                rule: "required",
            });
            None
        }
    };

    let email = match payload.email {
        Some(e) if e.is_empty() => {
            errors.push(FieldError {
                field: "email",
                rule: "required",
            });
            None
        }
        Some(e) if !email_pattern().is_match(&e) => {
            errors.push(FieldError {
                field: "email",
                rule: "must be a valid email address",
            });
            None
        }
        Some(e) => Some(e),
        None => {
            errors.push(FieldError {
                field: "email",
                rule: "required",
            });
            None
        }
    };

    let age = match payload.age {
        Some(a) if a < MIN_AGE => {
            errors.push(FieldError {
                field: "age",
                rule: "must be at least 16",
            });
            None
        }
        Some(a) => Some(a),
        None => {
            errors.push(FieldError {
                field: "age",
                rule: "required",
            });
            None
        }
    };

    match (name, email, age) {
        (Some(name), Some(email), Some(age)) if errors.is_empty() => Ok(StudentDraft {
            name,
            email,
            age,
            department: payload.department,
            enrolled_at: payload.enrolled_at,
            created_at: payload.created_at,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn payload(name: &str, email: &str, age: i32) -> StudentPayload {
        StudentPayload {
            name: Some(name.into()),
            email: Some(email.into()),
            age: Some(age),
            ..StudentPayload::default()
        }
    }

    fn violated_fields(result: Result<StudentDraft, Vec<FieldError>>) -> Vec<&'static str> {
        result
            .expect_err("payload should be rejected")
            .into_iter()
            .map(|e| e.field)
            .collect()
    }

    #[test]
    fn accepts_a_complete_payload() {
        let draft = validate(payload("Ada Lovelace", "ada@example.edu", 21)).unwrap();
        assert_eq!(draft.name, "Ada Lovelace");
        assert_eq!(draft.department, None);
        assert_eq!(draft.enrolled_at, None);
    }

    #[test]
    fn age_sixteen_is_the_boundary() {
        assert!(validate(payload("Ada", "ada@example.edu", 16)).is_ok());
        assert_eq!(
            violated_fields(validate(payload("Ada", "ada@example.edu", 15))),
            vec!["age"]
        );
    }

    #[rstest]
    #[case::no_at_sign("ada.example.edu")]
    #[case::no_domain_dot("ada@example")]
    #[case::embedded_space("ada lovelace@example.edu")]
    #[case::trailing_at("ada@")]
    fn rejects_malformed_emails(#[case] email: &str) {
        assert_eq!(
            violated_fields(validate(payload("Ada", email, 21))),
            vec!["email"]
        );
    }

    #[test]
    fn empty_name_counts_as_missing() {
        assert_eq!(
            violated_fields(validate(payload("", "ada@example.edu", 21))),
            vec!["name"]
        );
    }

    #[test]
    fn reports_every_missing_field_at_once() {
        let fields = violated_fields(validate(StudentPayload::default()));
        assert_eq!(fields, vec!["name", "email", "age"]);
    }

    #[test]
    fn optional_fields_pass_through() {
        let mut p = payload("Ada", "ada@example.edu", 21);
        p.department = Some("mathematics".into());
        p.enrolled_at = Some("2023-09-01".parse().unwrap());
        let draft = validate(p).unwrap();
        assert_eq!(draft.department.as_deref(), Some("mathematics"));
        assert_eq!(draft.enrolled_at, Some("2023-09-01".parse().unwrap()));
    }
}
