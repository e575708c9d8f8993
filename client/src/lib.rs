//! A rust client for talking to the ahnlich AI proxy
//!
//! Ships primarily the ai, pipeline and error submodules
//!
//! ## Pooling
//!
//! AIConnManager implements deadpool::managed::Manager and so can be used to
//! create a pool of connections for reuse across multiple threads or within
//! applications.
//!
//! ```no_run
//! use ahnlich_client_rs::ai::AIClient;
//! use ahnlich_client_rs::conn::AIConnManager;
//! use deadpool::managed::Pool;
//!
//! #[tokio::main]
//! async fn main() {
//!     let manager = AIConnManager::new("127.0.0.1".into(), 1370);
//!     let pool = Pool::builder(manager).max_size(10).build().unwrap();
//!     let ai_client = AIClient::new_with_pool(pool);
//!     ai_client.ping(None).await.unwrap();
//! }
//! ```
//!
//! ## Pipelining
//!
//! When using a client to issue commands, there is no guarantee of reading
//! your own writes, even when the commands are sent sequentially in client
//! code. This can be remedied by using a pipeline which then couples all the
//! commands in an ordered list and gets an ordered list of outcomes in
//! return, one per command
//!
//! ```no_run
//! use ahnlich_client_rs::ai::AIClient;
//! use ahnlich_client_rs::pipeline::AIQueryBatch;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ai_client = AIClient::new("127.0.0.1".into(), 1370).await.unwrap();
//!     let mut pipeline = ai_client.pipeline(3, None);
//!     pipeline.info_server();
//!     pipeline.list_clients();
//!     pipeline.list_stores();
//!     let outcomes = pipeline.exec().await.unwrap();
//!     assert_eq!(outcomes.len(), 3);
//! }
//! ```
//!
//! ## Lib Types
//!
//! Necessary library types to pass into client methods can be found from
//! prelude
//!
//! ```no_run
//! use ahnlich_client_rs::ai::AIClient;
//! use ahnlich_client_rs::builders::CreateStoreParams;
//! use ahnlich_client_rs::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ai_client = AIClient::new("127.0.0.1".into(), 1370).await.unwrap();
//!     let params = CreateStoreParams::builder()
//!         .store("Main".to_string())
//!         .query_model(AIModel::AllMiniLML6V2)
//!         .build();
//!     ai_client.create_store(params, None).await.unwrap();
//! }
//! ```
pub mod ai;
pub mod builders;
pub mod conn;
pub mod error;
pub mod pipeline;
pub mod prelude;
mod response;
