use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::repositories::{FilterCriteria, StoreError, StoreResult, UserRepository};
use crate::domain::user::{Role, Status, User, UserDraft, UserPatch};

/// In-memory implementation of [`UserRepository`]
///
/// Owns the live collection as a map from id to record plus the insertion
/// order of the ids, both behind a single exclusive lock, so every
/// operation is atomic with respect to the others. State lives only in
/// process memory and resets on restart.
pub struct InMemoryUserRepository {
    inner: RwLock<Directory>,
}

#[derive(Default)]
struct Directory {
    records: HashMap<String, User>,
    // Insertion order of the ids in `records`; kept in lockstep with it.
    order: Vec<String>,
}

impl Directory {
    fn insert(&mut self, user: User) {
        self.order.push(user.id.clone());
        self.records.insert(user.id.clone(), user);
    }

    /// All records in insertion order
    fn snapshot(&self) -> Vec<User> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .cloned()
            .collect()
    }
}

impl InMemoryUserRepository {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Directory::default()),
        }
    }

    /// Creates a store preloaded with the three demo records the original
    /// deployment starts with (well-known ids `"1"`-`"3"`)
    pub fn with_seed_data() -> Self {
        let mut directory = Directory::default();
        for user in seed_users() {
            directory.insert(user);
        }
        Self {
            inner: RwLock::new(directory),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Directory>> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Directory>> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> StoreResult<Vec<User>> {
        Ok(self.read()?.snapshot())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        Ok(self.read()?.records.get(id).cloned())
    }

    async fn create(&self, draft: UserDraft) -> StoreResult<User> {
        let mut directory = self.write()?;

        if let Some(id) = draft.supplied_id() {
            if directory.records.contains_key(id) {
                return Err(StoreError::DuplicateId(id.to_string()));
            }
        }

        let user = User::new(draft);
        directory.insert(user.clone());
        Ok(user)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> StoreResult<Option<User>> {
        let mut directory = self.write()?;

        match directory.records.get_mut(id) {
            Some(record) => {
                *record = record.merged(patch);
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut directory = self.write()?;

        if directory.records.remove(id).is_none() {
            return Ok(false);
        }
        directory.order.retain(|live| live != id);
        Ok(true)
    }

    async fn search(&self, text: &str) -> StoreResult<Vec<User>> {
        let needle = text.to_lowercase();
        let hits = self
            .read()?
            .snapshot()
            .into_iter()
            .filter(|user| matches_search(user, &needle))
            .collect();
        Ok(hits)
    }

    async fn filter(&self, criteria: &FilterCriteria) -> StoreResult<Vec<User>> {
        let hits = self
            .read()?
            .snapshot()
            .into_iter()
            .filter(|user| criteria.matches(user))
            .collect();
        Ok(hits)
    }
}

/// Case-insensitive substring match over the searchable fields; `needle`
/// must already be lowercased.
fn matches_search(user: &User, needle: &str) -> bool {
    user.first_name.to_lowercase().contains(needle)
        || user.last_name.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
        || user.department.to_lowercase().contains(needle)
}

/// The demo directory from the original deployment
fn seed_users() -> Vec<User> {
    let seeds = [
        (
            "1",
            "John",
            "Doe",
            "john.doe@company.com",
            "+1-555-0101",
            Role::Admin,
            Status::Active,
            "Engineering",
            "New York, USA",
            (2023, 1, 15),
        ),
        (
            "2",
            "Jane",
            "Smith",
            "jane.smith@company.com",
            "+1-555-0102",
            Role::Manager,
            Status::Active,
            "Marketing",
            "San Francisco, USA",
            (2023, 3, 20),
        ),
        (
            "3",
            "Mike",
            "Johnson",
            "mike.johnson@company.com",
            "+1-555-0103",
            Role::User,
            Status::Inactive,
            "Sales",
            "Chicago, USA",
            (2022, 11, 10),
        ),
    ];

    seeds
        .into_iter()
        .map(
            |(id, first, last, email, phone, role, status, department, location, (y, m, d))| {
                User::new(UserDraft {
                    id: Some(id.to_string()),
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                    role: Some(role),
                    status: Some(status),
                    department: department.to_string(),
                    location: location.to_string(),
                    join_date: NaiveDate::from_ymd_opt(y, m, d),
                })
            },
        )
        .collect()
}
