use crate::version::Version;
use crate::ServerType;
use serde::Deserialize;
use serde::Serialize;

/// StoreUpsert shows how many entries were inserted and updated during a store set call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoreUpsert {
    pub inserted: usize,
    pub updated: usize,
}

impl StoreUpsert {
    pub fn modified(&self) -> bool {
        self.inserted + self.updated > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialOrd, Ord)]
pub struct ServerInfo {
    pub address: String,
    pub version: Version,
    pub r#type: ServerType,
    pub limit: usize,
    pub remaining: usize,
}

/// ignore `remaining` field during comparison for server info as a server might allocate memory
impl PartialEq for ServerInfo {
    fn eq(&self, other: &Self) -> bool {
        self.version.eq(&other.version)
            && self.r#type.eq(&other.r#type)
            && self.limit.eq(&other.limit)
    }
}
