use crate::metadata::MetadataKey;
use crate::metadata::MetadataValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap as StdHashMap;
use std::fmt;

/// Name of a store
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct StoreName(pub String);

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A store value is a simple key value mapping of metadata
pub type StoreValue = StdHashMap<MetadataKey, MetadataValue>;

/// Input into an AI proxy store. The proxy turns inputs into store keys using
/// the configured index model, so clients only ever deal in raw strings or
/// binary blobs
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub enum StoreInput {
    RawString(String),
    Binary(Vec<u8>),
}
