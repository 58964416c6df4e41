//! User table derivation: sort, then status filter, then text search.
//!
//! The stages always run in that order so the rows on screen keep the sort
//! order after filtering. Sorting is stable, so records that compare equal
//! on the sort key stay in the order the backend returned them.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use warden_model::{User, UserStatus};

/// Column the table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Email,
}

impl SortKey {
    fn key<'a>(&self, user: &'a User) -> &'a str {
        match self {
            SortKey::Name => &user.name,
            SortKey::Email => &user.email,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Email => "Email",
        }
    }
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Column header clicked: reselecting the ascending column flips it to
    /// descending, anything else sorts `key` ascending.
    pub fn toggle(&mut self, key: SortKey) {
        let direction = if self.key == key
            && self.direction == SortDirection::Ascending
        {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        *self = SortConfig { key, direction };
    }

    /// Arrow shown next to the header of the active column.
    pub fn indicator(&self, key: SortKey) -> &'static str {
        match (self.key == key, self.direction) {
            (false, _) => "",
            (true, SortDirection::Ascending) => "▲",
            (true, SortDirection::Descending) => "▼",
        }
    }

    fn compare(&self, a: &User, b: &User) -> Ordering {
        let ordering = self.key.key(a).cmp(self.key.key(b));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(UserStatus),
}

impl StatusFilter {
    pub fn matches(&self, user: &User) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => user.status == *status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => write!(f, "{status}"),
        }
    }
}

/// Error returned when a sort or filter option cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind}: {value:?}")]
pub struct ParseViewOptionError {
    kind: &'static str,
    value: String,
}

impl FromStr for StatusFilter {
    type Err = ParseViewOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<UserStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| ParseViewOptionError {
                kind: "status filter",
                value: s.to_string(),
            })
    }
}

impl FromStr for SortKey {
    type Err = ParseViewOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "email" => Ok(SortKey::Email),
            _ => Err(ParseViewOptionError {
                kind: "sort key",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseViewOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ParseViewOptionError {
                kind: "sort direction",
                value: s.to_string(),
            }),
        }
    }
}

/// Rows of the user table after all three stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    rows: Vec<&'a User>,
}

impl<'a> DerivedView<'a> {
    pub fn rows(&self) -> &[&'a User] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Nothing survived the filters; the table shows "No results found"
    /// instead of rows.
    pub fn no_results(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a User> + '_ {
        self.rows.iter().copied()
    }

    pub fn to_owned_rows(&self) -> Vec<User> {
        self.rows.iter().map(|user| (*user).clone()).collect()
    }
}

/// Stage 1: stable sort on the configured key.
pub fn sort_users<'a>(users: &'a [User], sort: &SortConfig) -> Vec<&'a User> {
    let mut rows: Vec<&User> = users.iter().collect();
    rows.sort_by(|a, b| sort.compare(a, b));
    rows
}

/// Stage 2: keep rows whose status passes the filter.
pub fn filter_by_status<'a>(
    rows: Vec<&'a User>,
    filter: StatusFilter,
) -> Vec<&'a User> {
    rows.into_iter().filter(|user| filter.matches(user)).collect()
}

/// Stage 3: case-insensitive substring match on name or email.
pub fn search_users<'a>(rows: Vec<&'a User>, query: &str) -> Vec<&'a User> {
    if query.is_empty() {
        return rows;
    }
    let needle = query.to_lowercase();
    rows.into_iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn derive_view<'a>(
    users: &'a [User],
    sort: &SortConfig,
    status_filter: StatusFilter,
    search_query: &str,
) -> DerivedView<'a> {
    let rows = sort_users(users, sort);
    let rows = filter_by_status(rows, status_filter);
    let rows = search_users(rows, search_query);
    DerivedView { rows }
}
