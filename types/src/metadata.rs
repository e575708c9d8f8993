use serde::Deserialize;
use serde::Serialize;

/// New type for store metadata keys
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataKey(String);

impl MetadataKey {
    pub fn new(input: String) -> Self {
        Self(input)
    }
}

/// Values stored against a metadata key. Binary values exist so stores indexed
/// by image models can carry the original bytes alongside their entries
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum MetadataValue {
    RawString(String),
    Binary(Vec<u8>),
}
