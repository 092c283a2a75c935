use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::user::UserDraft;
use super::value_objects::{Role, Status};

/// One field-level failure, `{"field": ..., "message": ...}` on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

impl Violation {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Incoming write body for create and full-replacement update
///
/// Every field is optional at the parse boundary so that a missing required
/// field surfaces as a named violation rather than a serde error. `role`,
/// `status` and `join_date` are already closed types: an invalid variant or
/// date fails deserialization and never reaches the rules below. Unknown
/// keys (including client-sent `createdAt`/`updatedAt`) are ignored, which
/// makes the timestamps unwritable from the outside.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub status: Option<Status>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub join_date: Option<NaiveDate>,
}

/// Evaluates the field rules against a candidate payload
///
/// Pure check, no side effects. Fields are evaluated independently in
/// declaration order; within a single field the chain stops at the first
/// failure, so a blank value reports only its "required" message. An empty
/// result means the payload is accepted.
pub fn validate(payload: &UserPayload) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_name(
        &mut violations,
        "firstName",
        payload.first_name.as_deref(),
        "First name is required",
        "First name must be 2-50 characters",
    );
    check_name(
        &mut violations,
        "lastName",
        payload.last_name.as_deref(),
        "Last name is required",
        "Last name must be 2-50 characters",
    );

    match trimmed(payload.email.as_deref()) {
        None => violations.push(Violation::new("email", "Email is required")),
        Some(email) if !email_regex().is_match(email) => {
            violations.push(Violation::new("email", "Must be a valid email"));
        }
        _ => {}
    }

    match trimmed(payload.phone.as_deref()) {
        None => violations.push(Violation::new("phone", "Phone is required")),
        Some(phone) if !phone_regex().is_match(phone) => {
            violations.push(Violation::new("phone", "Invalid phone format"));
        }
        _ => {}
    }

    if trimmed(payload.department.as_deref()).is_none() {
        violations.push(Violation::new("department", "Department is required"));
    }
    if trimmed(payload.location.as_deref()).is_none() {
        violations.push(Violation::new("location", "Location is required"));
    }

    violations
}

impl TryFrom<UserPayload> for UserDraft {
    type Error = Vec<Violation>;

    /// An accepted payload becomes a trimmed draft (a blank id turning into
    /// an absent one); a rejected one becomes the full violation list. No
    /// partial result ever escapes.
    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        let violations = validate(&payload);
        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(UserDraft {
            id: trimmed(payload.id.as_deref()).map(str::to_string),
            first_name: required(payload.first_name),
            last_name: required(payload.last_name),
            email: required(payload.email),
            phone: required(payload.phone),
            role: payload.role,
            status: payload.status,
            department: required(payload.department),
            location: required(payload.location),
            join_date: payload.join_date,
        })
    }
}

/// `None` when the value is absent or blank after trimming
fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Trims an accepted required field; validation has already ruled out the
/// absent and blank cases.
fn required(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn check_name(
    out: &mut Vec<Violation>,
    field: &'static str,
    value: Option<&str>,
    required_msg: &'static str,
    length_msg: &'static str,
) {
    match trimmed(value) {
        None => out.push(Violation::new(field, required_msg)),
        Some(name) if !(2..=50).contains(&name.chars().count()) => {
            out.push(Violation::new(field, length_msg));
        }
        _ => {}
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn phone_regex() -> &'static Regex {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    PHONE_RE.get_or_init(|| Regex::new(r"^[\d\s\-\+\(\)]+$").unwrap())
}
