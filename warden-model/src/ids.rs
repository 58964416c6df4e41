use uuid::Uuid;

/// Opaque identifier of a user record.
///
/// The backend treats ids as plain strings, so no format is enforced when
/// one arrives over the wire. An empty id marks a record that has not been
/// created yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    /// Mint a fresh id for a record about to be created.
    ///
    /// UUIDv7 packs a millisecond timestamp followed by random bits, so two
    /// ids only collide when minted in the same millisecond with the same
    /// 74 random bits.
    pub fn generate() -> Self {
        UserId(Uuid::now_v7().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId(value)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
