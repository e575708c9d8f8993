//! Accumulation of queries into a single ordered batch.
//!
//! Two builders share the same accumulation surface: [`AIRequestBuilder`]
//! knows nothing about connections and only ever produces an
//! [`AIServerQuery`], while [`AIPipeline`] is handed out by
//! [`AIClient::pipeline`](crate::ai::AIClient::pipeline) and can submit the
//! batch it accumulated through the client's pool in one round trip.

use crate::builders::{
    CreateNonLinearAlgorithmIndexParams, CreatePredIndexParams, CreateStoreParams, DelKeyParams,
    DropNonLinearAlgorithmIndexParams, DropPredIndexParams, DropStoreParams, GetKeyParams,
    GetPredParams, GetSimNParams, SetParams,
};
use crate::conn::AIConnManager;
use crate::error::AhnlichError;
use crate::response;
use ahnlich_types::ai::{AIQuery, AIServerQuery, AIServerResponse};
use deadpool::managed::Pool;

/// Accumulation methods shared by the standalone request builder and the
/// client bound pipeline. One method exists per AI proxy operation; each call
/// appends exactly one query to the batch and never touches the network.
///
/// Methods that require a non-empty predicate or algorithm set validate
/// before appending, so a failed call leaves the batch untouched.
pub trait AIQueryBatch {
    /// append an already constructed query to the batch
    fn push(&mut self, query: AIQuery);

    /// push create store command to the batch
    fn create_store(&mut self, params: CreateStoreParams) {
        self.push(AIQuery::CreateStore {
            store: params.store,
            query_model: params.query_model,
            index_model: params.index_model,
            predicates: params.predicates,
            non_linear_indices: params.non_linear_indices,
            error_if_exists: params.error_if_exists,
        })
    }

    /// push get pred command to the batch
    fn get_pred(&mut self, params: GetPredParams) {
        self.push(AIQuery::GetPred {
            store: params.store,
            condition: params.condition,
        })
    }

    /// push get sim n command to the batch
    fn get_sim_n(&mut self, params: GetSimNParams) {
        self.push(AIQuery::GetSimN {
            store: params.store,
            search_input: params.search_input,
            condition: params.condition,
            closest_n: params.closest_n,
            algorithm: params.algorithm,
            preprocess_action: params.preprocess_action,
        })
    }

    /// push create pred index command to the batch, erroring before anything
    /// is queued when no predicates are given
    fn create_pred_index(&mut self, params: CreatePredIndexParams) -> Result<(), AhnlichError> {
        if params.predicates.is_empty() {
            return Err(AhnlichError::EmptyPredicates);
        }
        self.push(AIQuery::CreatePredIndex {
            store: params.store,
            predicates: params.predicates,
        });
        Ok(())
    }

    /// push create non linear algorithm index command to the batch
    fn create_non_linear_algorithm_index(
        &mut self,
        params: CreateNonLinearAlgorithmIndexParams,
    ) -> Result<(), AhnlichError> {
        if params.non_linear_indices.is_empty() {
            return Err(AhnlichError::EmptyNonLinearIndices);
        }
        self.push(AIQuery::CreateNonLinearAlgorithmIndex {
            store: params.store,
            non_linear_indices: params.non_linear_indices,
        });
        Ok(())
    }

    /// push drop pred index command to the batch
    fn drop_pred_index(&mut self, params: DropPredIndexParams) -> Result<(), AhnlichError> {
        if params.predicates.is_empty() {
            return Err(AhnlichError::EmptyPredicates);
        }
        self.push(AIQuery::DropPredIndex {
            store: params.store,
            predicates: params.predicates,
            error_if_not_exists: params.error_if_not_exists,
        });
        Ok(())
    }

    /// push drop non linear algorithm index command to the batch
    fn drop_non_linear_algorithm_index(
        &mut self,
        params: DropNonLinearAlgorithmIndexParams,
    ) -> Result<(), AhnlichError> {
        if params.non_linear_indices.is_empty() {
            return Err(AhnlichError::EmptyNonLinearIndices);
        }
        self.push(AIQuery::DropNonLinearAlgorithmIndex {
            store: params.store,
            non_linear_indices: params.non_linear_indices,
            error_if_not_exists: params.error_if_not_exists,
        });
        Ok(())
    }

    /// push set command to the batch
    fn set(&mut self, params: SetParams) {
        self.push(AIQuery::Set {
            store: params.store,
            inputs: params.inputs,
            preprocess_action: params.preprocess_action,
        })
    }

    /// push del key command to the batch
    fn del_key(&mut self, params: DelKeyParams) {
        self.push(AIQuery::DelKey {
            store: params.store,
            key: params.key,
        })
    }

    /// push get key command to the batch
    fn get_key(&mut self, params: GetKeyParams) {
        self.push(AIQuery::GetKey {
            store: params.store,
            keys: params.keys,
        })
    }

    /// push drop store command to the batch
    fn drop_store(&mut self, params: DropStoreParams) {
        self.push(AIQuery::DropStore {
            store: params.store,
            error_if_not_exists: params.error_if_not_exists,
        })
    }

    /// push purge stores command to the batch
    fn purge_stores(&mut self) {
        self.push(AIQuery::PurgeStores)
    }

    /// push info server command to the batch
    fn info_server(&mut self) {
        self.push(AIQuery::InfoServer)
    }

    /// push list stores command to the batch
    fn list_stores(&mut self) {
        self.push(AIQuery::ListStores)
    }

    /// push list clients command to the batch
    fn list_clients(&mut self) {
        self.push(AIQuery::ListClients)
    }

    /// push ping command to the batch
    fn ping(&mut self) {
        self.push(AIQuery::Ping)
    }
}

/// Standalone builder accumulating queries under a single tracing id without
/// holding any connection. Finalize with
/// [`to_server_query`](AIRequestBuilder::to_server_query) and submit the
/// resulting batch however you see fit
#[derive(Debug, Clone)]
pub struct AIRequestBuilder {
    queries: Vec<AIQuery>,
    tracing_id: Option<String>,
}

impl AIRequestBuilder {
    pub fn new(tracing_id: Option<String>) -> Self {
        Self {
            queries: Vec::new(),
            tracing_id,
        }
    }

    pub fn with_capacity(capacity: usize, tracing_id: Option<String>) -> Self {
        Self {
            queries: Vec::with_capacity(capacity),
            tracing_id,
        }
    }

    /// Seal the accumulated queries into a server query carrying the builder's
    /// tracing id.
    ///
    /// Finalizing does not clear the builder: calling this again without
    /// accumulating in between returns an identical batch, while accumulating
    /// afterwards grows the same underlying sequence, so a later finalize
    /// yields a superset of the earlier batch
    pub fn to_server_query(&self) -> AIServerQuery {
        let mut server_query = AIServerQuery::with_capacity_and_tracing_id(
            self.queries.len(),
            self.tracing_id.clone(),
        );
        for query in &self.queries {
            server_query.push(query.clone())
        }
        server_query
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

impl AIQueryBatch for AIRequestBuilder {
    fn push(&mut self, query: AIQuery) {
        self.queries.push(query)
    }
}

/// Allow executing multiple queries at once through a client's pool. Queries
/// run sequentially on the proxy in accumulation order and
/// [`exec`](AIPipeline::exec) returns their outcomes in that same order
#[derive(Debug)]
pub struct AIPipeline {
    builder: AIRequestBuilder,
    pool: Pool<AIConnManager>,
}

impl AIPipeline {
    pub(crate) fn with_capacity(
        capacity: usize,
        pool: Pool<AIConnManager>,
        tracing_id: Option<String>,
    ) -> Self {
        Self {
            builder: AIRequestBuilder::with_capacity(capacity, tracing_id),
            pool,
        }
    }

    /// Execute the accumulated queries in one wire round trip, returning one
    /// outcome per query in the order the queries were pushed. A connection is
    /// leased from the pool only for the duration of the round trip and is
    /// returned whether the call succeeds or fails
    pub async fn exec(
        self,
    ) -> Result<Vec<Result<AIServerResponse, AhnlichError>>, AhnlichError> {
        let server_query = self.builder.to_server_query();
        let expected = server_query.len();
        let mut conn = self.pool.get().await?;
        let results = conn.send_query(server_query).await?;
        response::into_outcomes(expected, results)
    }

    pub fn len(&self) -> usize {
        self.builder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builder.is_empty()
    }
}

impl AIQueryBatch for AIPipeline {
    fn push(&mut self, query: AIQuery) {
        self.builder.push(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahnlich_types::ai::{AIModel, PreprocessAction};
    use ahnlich_types::bincode::BinCodeSerAndDeserQuery;
    use ahnlich_types::keyval::StoreInput;
    use ahnlich_types::metadata::MetadataKey;
    use ahnlich_types::similarity::Algorithm;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::num::NonZeroUsize;

    #[test]
    fn test_builder_preserves_call_order() {
        let mut builder = AIRequestBuilder::new(None);
        builder.create_store(
            CreateStoreParams::builder()
                .store("Main".to_string())
                .build(),
        );
        builder.ping();
        builder.list_stores();
        let server_query = builder.to_server_query();
        assert_eq!(server_query.len(), 3);
        let queries = server_query.into_inner();
        assert!(matches!(queries[0], AIQuery::CreateStore { .. }));
        assert_eq!(queries[1], AIQuery::Ping);
        assert_eq!(queries[2], AIQuery::ListStores);
    }

    #[test]
    fn test_empty_builder_finalizes_to_empty_batch() {
        let builder = AIRequestBuilder::new(None);
        assert!(builder.is_empty());
        assert_eq!(builder.to_server_query().len(), 0);
    }

    #[test]
    fn test_finalize_is_idempotent_until_mutated() {
        let mut builder = AIRequestBuilder::new(Some("00-traceparent-01".to_string()));
        builder.ping();
        builder.list_clients();
        let first = builder.to_server_query();
        let second = builder.to_server_query();
        assert_eq!(first, second);
        // accumulating after finalize grows the same underlying sequence
        builder.list_stores();
        let third = builder.to_server_query();
        assert_eq!(third.len(), 3);
        assert_eq!(
            third.get_traceparent(),
            Some("00-traceparent-01".to_string())
        );
    }

    #[test]
    fn test_tracing_id_is_attached_once_per_batch() {
        let mut builder = AIRequestBuilder::new(Some("trace-me".to_string()));
        builder.ping();
        builder.ping();
        let server_query = builder.to_server_query();
        assert_eq!(server_query.get_traceparent(), Some("trace-me".to_string()));
        assert_eq!(AIRequestBuilder::new(None).to_server_query().get_traceparent(), None);
    }

    #[test]
    fn test_index_queries_reject_empty_sets_before_queueing() {
        let mut builder = AIRequestBuilder::new(None);
        let res = builder.create_pred_index(
            CreatePredIndexParams::builder()
                .store("Main".to_string())
                .predicates(HashSet::new())
                .build(),
        );
        assert!(matches!(res, Err(AhnlichError::EmptyPredicates)));
        let res = builder.drop_pred_index(
            DropPredIndexParams::builder()
                .store("Main".to_string())
                .predicates(HashSet::new())
                .build(),
        );
        assert!(matches!(res, Err(AhnlichError::EmptyPredicates)));
        let res = builder.create_non_linear_algorithm_index(
            CreateNonLinearAlgorithmIndexParams::builder()
                .store("Main".to_string())
                .non_linear_indices(HashSet::new())
                .build(),
        );
        assert!(matches!(res, Err(AhnlichError::EmptyNonLinearIndices)));
        // nothing was queued by any of the rejected calls
        assert!(builder.is_empty());
    }

    #[test]
    fn test_create_store_defaults() {
        let params = CreateStoreParams::builder()
            .store("Main".to_string())
            .build();
        assert_eq!(params.query_model, AIModel::AllMiniLML6V2);
        assert_eq!(params.index_model, AIModel::AllMiniLML6V2);
        assert!(params.predicates.is_empty());
        assert!(params.non_linear_indices.is_empty());
        assert!(params.error_if_exists);
    }

    #[test]
    fn test_get_sim_n_defaults() {
        let params = GetSimNParams::builder()
            .store("Main".to_string())
            .search_input(StoreInput::RawString("pair of sneakers".to_string()))
            .build();
        assert_eq!(params.closest_n, NonZeroUsize::MIN);
        assert_eq!(params.algorithm, Algorithm::CosineSimilarity);
        assert_eq!(params.preprocess_action, PreprocessAction::ModelPreprocessing);
        assert_eq!(params.condition, None);
    }

    #[test]
    fn test_set_and_drop_store_defaults() {
        let set_params = SetParams::builder()
            .store("Main".to_string())
            .inputs(vec![])
            .build();
        assert_eq!(set_params.preprocess_action, PreprocessAction::NoPreprocessing);
        let drop_params = DropStoreParams::builder()
            .store("Main".to_string())
            .build();
        assert!(drop_params.error_if_not_exists);
    }

    #[test]
    fn test_builder_maps_params_onto_query_fields() {
        let mut builder = AIRequestBuilder::new(None);
        builder
            .drop_pred_index(
                DropPredIndexParams::builder()
                    .store("Main".to_string())
                    .predicates(HashSet::from_iter([MetadataKey::new("brand".to_string())]))
                    .error_if_not_exists(false)
                    .build(),
            )
            .expect("predicates are non-empty");
        let queries = builder.to_server_query().into_inner();
        assert_eq!(
            queries[0],
            AIQuery::DropPredIndex {
                store: ahnlich_types::keyval::StoreName("Main".to_string()),
                predicates: HashSet::from_iter([MetadataKey::new("brand".to_string())]),
                error_if_not_exists: false,
            }
        );
    }
}
