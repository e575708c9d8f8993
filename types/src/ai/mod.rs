mod preprocess;
mod query;
mod server;

pub use preprocess::PreprocessAction;
pub use query::{AIQuery, AIServerQuery};
pub use server::{AIServerResponse, AIServerResult, AIStoreInfo};

use serde::{Deserialize, Serialize};

/// Embedding models supported by the AI proxy. The same enum is used to pick
/// the model that indexes store entries and the model that embeds search
/// inputs at query time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum AIModel {
    AllMiniLML6V2,
    AllMiniLML12V2,
    BGEBaseEnV15,
    BGELargeEnV15,
    Resnet50,
    ClipVitB32,
}
