use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::{Role, Status, User, UserDraft, UserPatch};

/// Failures a store backend can report
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User with id {0} already exists")]
    DuplicateId(String),

    #[error("user store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Optional exact-match constraints on a record, combined with AND semantics
///
/// Absent constraints impose no restriction, so empty criteria match every
/// record.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub role: Option<Role>,
    pub status: Option<Status>,
    pub department: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.status.is_none() && self.department.is_none()
    }

    /// True when the record satisfies every supplied constraint
    pub fn matches(&self, user: &User) -> bool {
        self.role.map_or(true, |role| user.role == role)
            && self.status.map_or(true, |status| user.status == status)
            && self
                .department
                .as_deref()
                .map_or(true, |department| user.department == department)
    }
}

/// Repository trait for the user directory
///
/// Sole authority over the live collection. Implementations behave as if
/// operations were serialized: each call is atomic with respect to the
/// others, and a failed call leaves the collection unchanged.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All records, insertion order preserved
    async fn list(&self) -> StoreResult<Vec<User>>;

    /// The record with this id, or `None`
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>>;

    /// Constructs a record from the draft (minting an id when absent,
    /// defaulting role/status/join date, stamping both timestamps) and
    /// appends it to the collection. A supplied id that is already live is
    /// rejected with [`StoreError::DuplicateId`].
    async fn create(&self, draft: UserDraft) -> StoreResult<User>;

    /// Merges the patch over the stored record, keeping its position and
    /// re-stamping `updated_at`. `None` when the id is absent.
    async fn update(&self, id: &str, patch: UserPatch) -> StoreResult<Option<User>>;

    /// Removes the record, preserving the relative order of the rest.
    /// `false` when the id is absent.
    async fn delete(&self, id: &str) -> StoreResult<bool>;

    /// Case-insensitive substring match over first name, last name, email
    /// and department (OR across fields); returns an original-order
    /// subsequence of the collection.
    async fn search(&self, text: &str) -> StoreResult<Vec<User>>;

    /// Records satisfying every supplied criterion, in insertion order
    async fn filter(&self, criteria: &FilterCriteria) -> StoreResult<Vec<User>>;
}
