use serde::{Deserialize, Serialize};

/// Kind of inventory operation a caller wants to perform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// List items.
    #[serde(rename = "items.read")]
    ItemsRead,
    /// Add or remove items.
    #[serde(rename = "items.write")]
    ItemsWrite,
    /// Lend and accept returns.
    #[serde(rename = "loans.manage")]
    LoansManage,
}

impl Permission {
    pub const ALL: [Permission; 3] = [
        Permission::ItemsRead,
        Permission::ItemsWrite,
        Permission::LoansManage,
    ];

    /// Stable dotted name (e.g. "items.read").
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ItemsRead => "items.read",
            Permission::ItemsWrite => "items.write",
            Permission::LoansManage => "loans.manage",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
