//! User domain entity and its query options.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::address::Address;
use crate::error::{DomainError, DomainResult};

/// User domain entity
///
/// The address is stored in its own table and attached by the service layer,
/// either per user or through the joined fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier (nil until created)
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub birthdate: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl User {
    /// Create a user that has not been persisted yet
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        birthdate: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::nil(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            birthdate,
            deleted_at: None,
            address: None,
        }
    }

    /// Attach an address to this user
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Check if user is soft deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Take the owned address, failing when none was supplied
    pub fn take_address(&mut self) -> DomainResult<Address> {
        self.address.take().ok_or(DomainError::InvalidAddress)
    }
}

/// Remove every space from a phone number.
pub fn normalize_phone(phone: &str) -> String {
    phone.replace(' ', "")
}

/// A single user filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserQueryOption {
    Id(String),
    Email(String),
    FirstName(String),
    LastName(String),
}

/// Filter criteria for user lookups.
///
/// Options are merged field by field: a later option replaces only the field
/// it names, and empty values leave the field unset. Set fields are combined
/// with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQueryOptions {
    pub id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserQueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one option into the criteria
    pub fn apply(mut self, option: UserQueryOption) -> Self {
        let (slot, value) = match option {
            UserQueryOption::Id(v) => (&mut self.id, v),
            UserQueryOption::Email(v) => (&mut self.email, v),
            UserQueryOption::FirstName(v) => (&mut self.first_name, v),
            UserQueryOption::LastName(v) => (&mut self.last_name, v),
        };
        if !value.is_empty() {
            *slot = Some(value);
        }
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.apply(UserQueryOption::Id(id.into()))
    }

    pub fn email(self, email: impl Into<String>) -> Self {
        self.apply(UserQueryOption::Email(email.into()))
    }

    pub fn first_name(self, first_name: impl Into<String>) -> Self {
        self.apply(UserQueryOption::FirstName(first_name.into()))
    }

    pub fn last_name(self, last_name: impl Into<String>) -> Self {
        self.apply(UserQueryOption::LastName(last_name.into()))
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
    }

    /// Parse the id filter, if any.
    pub fn parsed_id(&self) -> DomainResult<Option<Uuid>> {
        self.id
            .as_deref()
            .map(|raw| Uuid::parse_str(raw).map_err(|_| DomainError::invalid_identifier(raw)))
            .transpose()
    }
}

impl FromIterator<UserQueryOption> for UserQueryOptions {
    fn from_iter<I: IntoIterator<Item = UserQueryOption>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::apply)
    }
}
