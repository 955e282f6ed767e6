//! User directory: in-memory user records, filtering, and CRUD.
//!
//! DESIGN
//! ======
//! The directory is a single ordered `Vec<User>`; every read walks it in
//! insertion order and every filter is recomputed from scratch. Ids come from
//! a monotonically increasing counter that starts past the seed records and
//! is never rewound, so deleting a record can never cause a later add to
//! reuse its id.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::validation::{self, FieldErrors};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
    #[default]
    User,
    Viewer,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::Admin, Self::Editor, Self::User, Self::Viewer];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::User => "User",
            Self::Viewer => "Viewer",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Pending,
    Inactive,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Active, Self::Pending, Self::Inactive];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Inactive => "Inactive",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// One row of the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    pub department: String,
    pub join_date: String,
}

/// Add/edit form payload: a user without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    pub department: String,
    /// `YYYY-MM-DD`; today on add, unchanged on edit when absent.
    pub join_date: Option<String>,
}

impl UserForm {
    /// # Errors
    ///
    /// Returns the per-field messages of the user form rules.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        validation::validate_user(&self.name, &self.email, &self.department)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("user not found: {0}")]
    NotFound(String),
    #[error("invalid user form")]
    Invalid(FieldErrors),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
}

fn today() -> String {
    time::OffsetDateTime::now_utc().date().to_string()
}

// =============================================================================
// FILTER
// =============================================================================

/// Conjunction of the directory's search and selector criteria.
/// `None` and an empty search mean "match all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    pub search: String,
    pub role: Option<Role>,
    pub status: Option<Status>,
    pub department: Option<String>,
}

impl DirectoryFilter {
    /// Whether any criterion narrows the result.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.role.is_some() || self.status.is_some() || self.department.is_some()
    }

    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        self.matches_lowered(&self.search.to_lowercase(), user)
    }

    fn matches_lowered(&self, needle: &str, user: &User) -> bool {
        let text = user.name.to_lowercase().contains(needle) || user.email.to_lowercase().contains(needle);
        text && self.role.is_none_or(|r| user.role == r)
            && self.status.is_none_or(|s| user.status == s)
            && self.department.as_deref().is_none_or(|d| user.department == d)
    }
}

/// Records satisfying `filter`, in their original order.
#[must_use]
pub fn filter_users<'a>(users: &'a [User], filter: &DirectoryFilter) -> Vec<&'a User> {
    let needle = filter.search.to_lowercase();
    users
        .iter()
        .filter(|u| filter.matches_lowered(&needle, u))
        .collect()
}

// =============================================================================
// DIRECTORY
// =============================================================================

pub struct UserDirectory {
    users: Vec<User>,
    next_id: u64,
}

impl UserDirectory {
    /// Wrap an existing collection. The id counter starts past both the
    /// collection length and the largest numeric id in it.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        let max_id = users
            .iter()
            .filter_map(|u| u.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next_id = max_id.max(users.len() as u64) + 1;
        Self { users, next_id }
    }

    /// Directory populated with the demo records.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    #[must_use]
    pub fn filter(&self, filter: &DirectoryFilter) -> Vec<&User> {
        filter_users(&self.users, filter)
    }

    /// Append a validated record with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Invalid`] if the form fails validation.
    pub fn add(&mut self, form: UserForm) -> Result<User, DirectoryError> {
        form.validate().map_err(DirectoryError::Invalid)?;

        let id = self.next_id.to_string();
        self.next_id += 1;

        let user = User {
            id,
            name: form.name,
            email: form.email,
            role: form.role,
            status: form.status,
            department: form.department,
            join_date: form.join_date.unwrap_or_else(today),
        };
        info!(id = %user.id, email = %user.email, "user added");
        self.users.push(user.clone());
        Ok(user)
    }

    /// Replace the record whose id equals `user.id`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if no record has that id.
    pub fn replace(&mut self, user: User) -> Result<User, DirectoryError> {
        let slot = self
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| DirectoryError::NotFound(user.id.clone()))?;
        *slot = user.clone();
        info!(id = %user.id, "user updated");
        Ok(user)
    }

    /// Validate `form` and apply it to the record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Invalid`] for a bad form and
    /// [`DirectoryError::NotFound`] for an unknown id.
    pub fn update(&mut self, id: &str, form: UserForm) -> Result<User, DirectoryError> {
        form.validate().map_err(DirectoryError::Invalid)?;
        let existing = self.get(id).ok_or_else(|| DirectoryError::NotFound(id.to_owned()))?;

        let user = User {
            id: existing.id.clone(),
            join_date: form.join_date.unwrap_or_else(|| existing.join_date.clone()),
            name: form.name,
            email: form.email,
            role: form.role,
            status: form.status,
            department: form.department,
        };
        self.replace(user)
    }

    /// Remove the record `id` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if no record has that id.
    pub fn delete(&mut self, id: &str) -> Result<User, DirectoryError> {
        let idx = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| DirectoryError::NotFound(id.to_owned()))?;
        let removed = self.users.remove(idx);
        info!(id = %removed.id, "user deleted");
        Ok(removed)
    }

    /// Distinct departments in first-seen order.
    #[must_use]
    pub fn departments(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for user in &self.users {
            if !seen.contains(&user.department) {
                seen.push(user.department.clone());
            }
        }
        seen
    }

    #[must_use]
    pub fn stats(&self) -> DirectoryStats {
        let count = |status: Status| self.users.iter().filter(|u| u.status == status).count();
        DirectoryStats {
            total: self.users.len(),
            active: count(Status::Active),
            pending: count(Status::Pending),
            inactive: count(Status::Inactive),
        }
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

// =============================================================================
// SEED DATA
// =============================================================================

fn seed_user(id: u32, name: &str, email: &str, role: Role, status: Status, department: &str, join_date: &str) -> User {
    User {
        id: id.to_string(),
        name: name.into(),
        email: email.into(),
        role,
        status,
        department: department.into(),
        join_date: join_date.into(),
    }
}

/// Demo records the directory starts with.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        seed_user(1, "John Doe", "john.doe@example.com", Role::Admin, Status::Active, "Engineering", "2023-01-15"),
        seed_user(2, "Jane Smith", "jane.smith@example.com", Role::Editor, Status::Active, "Marketing", "2023-02-20"),
        seed_user(3, "Bob Johnson", "bob.johnson@example.com", Role::User, Status::Pending, "Sales", "2023-03-10"),
        seed_user(4, "Alice Williams", "alice.williams@example.com", Role::Viewer, Status::Inactive, "Support", "2023-04-05"),
        seed_user(5, "Charlie Brown", "charlie.brown@example.com", Role::User, Status::Active, "Engineering", "2023-05-12"),
        seed_user(6, "Diana Prince", "diana.prince@example.com", Role::Editor, Status::Active, "Marketing", "2023-06-18"),
        seed_user(7, "Ethan Hunt", "ethan.hunt@example.com", Role::Admin, Status::Pending, "Operations", "2023-07-22"),
        seed_user(8, "Fiona Gallagher", "fiona.gallagher@example.com", Role::User, Status::Active, "Sales", "2023-08-30"),
    ]
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
