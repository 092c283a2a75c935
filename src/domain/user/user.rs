use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{Role, Status};

/// A directory user record
///
/// This is both the domain entity and the wire representation: the JSON the
/// presentation layer consumes uses the camelCase field names below. The
/// timestamps are owned by the record lifecycle: `created_at` is set once
/// in [`User::new`] and `updated_at` is re-stamped by every [`User::merged`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub status: Status,
    pub department: String,
    pub location: String,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a record
///
/// Produced only by the validation rules (`TryFrom<UserPayload>`), so the
/// required string fields are guaranteed trimmed and non-empty by the time a
/// draft exists. Optional fields are the ones [`User::new`] defaults.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: Option<Role>,
    pub status: Option<Status>,
    pub department: String,
    pub location: String,
    pub join_date: Option<NaiveDate>,
}

/// Explicit partial update: absent fields keep their stored values
///
/// A patch carries no `id` (the record id is immutable) and no timestamp
/// fields, which only the merge itself may touch.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
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

impl UserDraft {
    /// The id this draft supplies, with a blank one counting as absent
    pub fn supplied_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

impl User {
    /// Builds a new record from a validated draft
    ///
    /// Mints a UUIDv4 id when the draft supplies none (a blank id counts as
    /// absent), applies the role/status defaults, defaults `join_date` to
    /// today, and stamps both timestamps with the same instant so
    /// `updated_at >= created_at` holds from birth.
    pub fn new(draft: UserDraft) -> Self {
        let now = Utc::now();
        let id = draft
            .supplied_id()
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: draft.phone,
            role: draft.role.unwrap_or_default(),
            status: draft.status.unwrap_or_default(),
            department: draft.department,
            location: draft.location,
            join_date: draft.join_date.unwrap_or_else(|| now.date_naive()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a new record value with the patch merged over this one
    ///
    /// Supplied fields overwrite, absent fields carry over; `id` and
    /// `created_at` are preserved and `updated_at` is re-stamped.
    pub fn merged(&self, patch: UserPatch) -> Self {
        Self {
            id: self.id.clone(),
            first_name: patch.first_name.unwrap_or_else(|| self.first_name.clone()),
            last_name: patch.last_name.unwrap_or_else(|| self.last_name.clone()),
            email: patch.email.unwrap_or_else(|| self.email.clone()),
            phone: patch.phone.unwrap_or_else(|| self.phone.clone()),
            role: patch.role.unwrap_or(self.role),
            status: patch.status.unwrap_or(self.status),
            department: patch.department.unwrap_or_else(|| self.department.clone()),
            location: patch.location.unwrap_or_else(|| self.location.clone()),
            join_date: patch.join_date.unwrap_or(self.join_date),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    /// `"{first_name} {last_name}"`, computed on demand and never stored
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<UserDraft> for UserPatch {
    /// A whole draft as a patch, for full-replacement updates. The draft's
    /// required fields are all supplied; its optional fields stay optional,
    /// so an absent role or status keeps the stored value. The draft id is
    /// dropped here since a patch cannot carry one.
    fn from(draft: UserDraft) -> Self {
        Self {
            first_name: Some(draft.first_name),
            last_name: Some(draft.last_name),
            email: Some(draft.email),
            phone: Some(draft.phone),
            role: draft.role,
            status: draft.status,
            department: Some(draft.department),
            location: Some(draft.location),
            join_date: draft.join_date,
        }
    }
}
