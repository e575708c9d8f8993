use crate::builders::{
    CreateNonLinearAlgorithmIndexParams, CreatePredIndexParams, CreateStoreParams, DelKeyParams,
    DropNonLinearAlgorithmIndexParams, DropPredIndexParams, DropStoreParams, GetKeyParams,
    GetPredParams, GetSimNParams, SetParams,
};
use crate::conn::AIConnManager;
use crate::error::AhnlichError;
use crate::pipeline::{AIPipeline, AIQueryBatch, AIRequestBuilder};
use crate::response;
use ahnlich_types::ai::AIServerResponse;
use deadpool::managed::Pool;

/// Client for the ahnlich AI proxy using an instantiated deadpool pool.
///
/// Every convenience method accumulates a single query into a fresh builder,
/// submits it in one round trip and unwraps the sole outcome. A connection is
/// leased from the pool per round trip and returned unconditionally, so the
/// client is cheap to clone and safe to share across tasks
#[derive(Debug, Clone)]
pub struct AIClient {
    pool: Pool<AIConnManager>,
}

impl AIClient {
    /// create new AI proxy client with default deadpool config
    /// only made async because Pool::builder(...).build() can throw an error if not run within a
    /// runtime context like tokio
    pub async fn new(host: String, port: u16) -> Result<Self, AhnlichError> {
        let manager = AIConnManager::new(host, port);
        let pool = Pool::builder(manager).build()?;
        Ok(Self { pool })
    }

    /// create new AI proxy client with custom deadpool pool
    pub fn new_with_pool(pool: Pool<AIConnManager>) -> Self {
        Self { pool }
    }

    /// Instantiate a new pipeline of a given capacity for which queries would
    /// be run sequentially on `pipeline.exec`. The optional tracing id is
    /// attached once to the whole batch
    pub fn pipeline(&self, capacity: usize, tracing_id: Option<String>) -> AIPipeline {
        AIPipeline::with_capacity(capacity, self.pool.clone(), tracing_id)
    }

    pub async fn create_store(
        &self,
        params: CreateStoreParams,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.create_store(params);
        self.exec(builder).await
    }

    pub async fn get_pred(
        &self,
        params: GetPredParams,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.get_pred(params);
        self.exec(builder).await
    }

    pub async fn get_sim_n(
        &self,
        params: GetSimNParams,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.get_sim_n(params);
        self.exec(builder).await
    }

    pub async fn create_pred_index(
        &self,
        params: CreatePredIndexParams,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.create_pred_index(params)?;
        self.exec(builder).await
    }

    pub async fn create_non_linear_algorithm_index(
        &self,
        params: CreateNonLinearAlgorithmIndexParams,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.create_non_linear_algorithm_index(params)?;
        self.exec(builder).await
    }

    pub async fn drop_pred_index(
        &self,
        params: DropPredIndexParams,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.drop_pred_index(params)?;
        self.exec(builder).await
    }

    pub async fn drop_non_linear_algorithm_index(
        &self,
        params: DropNonLinearAlgorithmIndexParams,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.drop_non_linear_algorithm_index(params)?;
        self.exec(builder).await
    }

    pub async fn set(
        &self,
        params: SetParams,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.set(params);
        self.exec(builder).await
    }

    pub async fn del_key(
        &self,
        params: DelKeyParams,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.del_key(params);
        self.exec(builder).await
    }

    pub async fn get_key(
        &self,
        params: GetKeyParams,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.get_key(params);
        self.exec(builder).await
    }

    pub async fn drop_store(
        &self,
        params: DropStoreParams,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.drop_store(params);
        self.exec(builder).await
    }

    pub async fn purge_stores(
        &self,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.purge_stores();
        self.exec(builder).await
    }

    pub async fn info_server(
        &self,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.info_server();
        self.exec(builder).await
    }

    pub async fn list_stores(
        &self,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.list_stores();
        self.exec(builder).await
    }

    pub async fn list_clients(
        &self,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.list_clients();
        self.exec(builder).await
    }

    pub async fn ping(
        &self,
        tracing_id: Option<String>,
    ) -> Result<AIServerResponse, AhnlichError> {
        let mut builder = AIRequestBuilder::with_capacity(1, tracing_id);
        builder.ping();
        self.exec(builder).await
    }

    async fn exec(&self, builder: AIRequestBuilder) -> Result<AIServerResponse, AhnlichError> {
        let server_query = builder.to_server_query();
        let mut conn = self.pool.get().await?;
        let results = conn.send_query(server_query).await?;
        response::into_single(results)
    }
}
