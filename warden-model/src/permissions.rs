/// Read/write/delete grant attached to a user record.
///
/// Stored verbatim on the record once derived from its role; a record that
/// arrives without a permissions object is treated as granting nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permissions {
    pub read: bool,
    pub write: bool,
    pub delete: bool,
}

impl Permissions {
    pub const NONE: Permissions = Permissions::new(false, false, false);
    pub const ALL: Permissions = Permissions::new(true, true, true);

    pub const fn new(read: bool, write: bool, delete: bool) -> Self {
        Self {
            read,
            write,
            delete,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Names of the granted permissions, in read/write/delete order.
    pub fn granted(&self) -> Vec<&'static str> {
        [
            (self.read, "read"),
            (self.write, "write"),
            (self.delete, "delete"),
        ]
        .into_iter()
        .filter_map(|(granted, name)| granted.then_some(name))
        .collect()
    }
}

impl std::fmt::Display for Permissions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let granted = self.granted();
        if granted.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&granted.join(", "))
        }
    }
}
