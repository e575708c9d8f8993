//! Parameter structs for every AI proxy query that takes arguments.
//!
//! Defaults that are part of the observable contract live here: building a
//! params struct without touching an optional field always produces the same
//! query as the documented default.

use std::{collections::HashSet, num::NonZeroUsize};
use typed_builder::TypedBuilder;

use ahnlich_types::{
    ai::{AIModel, PreprocessAction},
    keyval::{StoreInput, StoreName, StoreValue},
    metadata::MetadataKey,
    predicate::PredicateCondition,
    similarity::{Algorithm, NonLinearAlgorithm},
};

#[derive(TypedBuilder)]
pub struct CreateStoreParams {
    #[builder(setter(transform = |s: String| StoreName(s)))]
    pub store: StoreName,

    #[builder(default = AIModel::AllMiniLML6V2)]
    pub query_model: AIModel,

    #[builder(default = AIModel::AllMiniLML6V2)]
    pub index_model: AIModel,

    #[builder(default = HashSet::new())]
    pub predicates: HashSet<MetadataKey>,

    #[builder(default = HashSet::new())]
    pub non_linear_indices: HashSet<NonLinearAlgorithm>,

    #[builder(default = true)]
    pub error_if_exists: bool,
}

#[derive(TypedBuilder)]
pub struct GetPredParams {
    #[builder(setter(transform = |s: String| StoreName(s)))]
    pub store: StoreName,

    pub condition: PredicateCondition,
}

#[derive(TypedBuilder)]
pub struct GetSimNParams {
    #[builder(setter(transform = |s: String| StoreName(s)))]
    pub store: StoreName,

    pub search_input: StoreInput,

    #[builder(default = None)]
    pub condition: Option<PredicateCondition>,

    #[builder(default = NonZeroUsize::MIN)]
    pub closest_n: NonZeroUsize,

    #[builder(default = Algorithm::CosineSimilarity)]
    pub algorithm: Algorithm,

    #[builder(default = PreprocessAction::ModelPreprocessing)]
    pub preprocess_action: PreprocessAction,
}

#[derive(TypedBuilder)]
pub struct CreatePredIndexParams {
    #[builder(setter(transform = |s: String| StoreName(s)))]
    pub store: StoreName,

    pub predicates: HashSet<MetadataKey>,
}

#[derive(TypedBuilder)]
pub struct CreateNonLinearAlgorithmIndexParams {
    #[builder(setter(transform = |s: String| StoreName(s)))]
    pub store: StoreName,

    #[builder(default = HashSet::from_iter([NonLinearAlgorithm::KDTree]))]
    pub non_linear_indices: HashSet<NonLinearAlgorithm>,
}

#[derive(TypedBuilder)]
pub struct DropPredIndexParams {
    #[builder(setter(transform = |s: String| StoreName(s)))]
    pub store: StoreName,

    pub predicates: HashSet<MetadataKey>,

    #[builder(default = true)]
    pub error_if_not_exists: bool,
}

#[derive(TypedBuilder)]
pub struct DropNonLinearAlgorithmIndexParams {
    #[builder(setter(transform = |s: String| StoreName(s)))]
    pub store: StoreName,

    #[builder(default = HashSet::from_iter([NonLinearAlgorithm::KDTree]))]
    pub non_linear_indices: HashSet<NonLinearAlgorithm>,

    #[builder(default = true)]
    pub error_if_not_exists: bool,
}

#[derive(TypedBuilder)]
pub struct SetParams {
    #[builder(setter(transform = |s: String| StoreName(s)))]
    pub store: StoreName,

    pub inputs: Vec<(StoreInput, StoreValue)>,

    #[builder(default = PreprocessAction::NoPreprocessing)]
    pub preprocess_action: PreprocessAction,
}

#[derive(TypedBuilder)]
pub struct DelKeyParams {
    #[builder(setter(transform = |s: String| StoreName(s)))]
    pub store: StoreName,

    pub key: StoreInput,
}

#[derive(TypedBuilder)]
pub struct GetKeyParams {
    #[builder(setter(transform = |s: String| StoreName(s)))]
    pub store: StoreName,

    pub keys: Vec<StoreInput>,
}

#[derive(TypedBuilder)]
pub struct DropStoreParams {
    #[builder(setter(transform = |s: String| StoreName(s)))]
    pub store: StoreName,

    #[builder(default = true)]
    pub error_if_not_exists: bool,
}
