//! Convenient re-export of the types needed to drive the client
pub use ahnlich_types::ai::{
    AIModel, AIQuery, AIServerQuery, AIServerResponse, AIServerResult, AIStoreInfo,
    PreprocessAction,
};
pub use ahnlich_types::client::ConnectedClient;
pub use ahnlich_types::keyval::{StoreInput, StoreName, StoreValue};
pub use ahnlich_types::metadata::{MetadataKey, MetadataValue};
pub use ahnlich_types::predicate::{Predicate, PredicateCondition};
pub use ahnlich_types::shared::{ServerInfo, StoreUpsert};
pub use ahnlich_types::similarity::{Algorithm, NonLinearAlgorithm, Similarity};
pub use ahnlich_types::version::Version;
pub use ahnlich_types::ServerType;
