use super::AIModel;
use crate::bincode::{BinCodeSerAndDeser, BinCodeSerAndDeserResponse};
use crate::client::ConnectedClient;
use crate::keyval::{StoreInput, StoreName, StoreValue};
use crate::shared::{ServerInfo, StoreUpsert};
use crate::similarity::Similarity;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Single response to a single query within a batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AIServerResponse {
    // Unit variant for no action
    Unit,
    Pong,
    // List of connected clients. Potentially outdated at the point of read
    ClientList(HashSet<ConnectedClient>),
    StoreList(HashSet<AIStoreInfo>),
    InfoServer(ServerInfo),
    Set(StoreUpsert),
    // Always returned in order of the key request, however when GetPred is
    // used there is no key request so the order can be mixed up
    Get(Vec<(StoreInput, StoreValue)>),
    GetSimN(Vec<(StoreInput, StoreValue, Similarity)>),
    // number of deleted entities
    Del(usize),
    // number of created indexes
    CreateIndex(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AIStoreInfo {
    pub name: StoreName,
    pub query_model: AIModel,
    pub index_model: AIModel,
    pub embedding_size: usize,
}

/// Ordered batch of responses from the AI proxy. Given that an array of
/// queries is sent in, an array of results of the same length is returned,
/// each entry being a potential error for the query at the same position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AIServerResult {
    results: Vec<Result<AIServerResponse, String>>,
}

impl AIServerResult {
    pub fn with_capacity(len: usize) -> Self {
        Self {
            results: Vec::with_capacity(len),
        }
    }

    pub fn push(&mut self, entry: Result<AIServerResponse, String>) {
        self.results.push(entry)
    }

    pub fn pop(mut self) -> Option<Result<AIServerResponse, String>> {
        self.results.pop()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_inner(self) -> Vec<Result<AIServerResponse, String>> {
        self.results
    }
}

impl BinCodeSerAndDeser for AIServerResult {}

impl BinCodeSerAndDeserResponse for AIServerResult {
    fn from_error(err: String) -> Self {
        Self {
            results: vec![Err(err)],
        }
    }
}
