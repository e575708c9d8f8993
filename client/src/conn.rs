use crate::error::AhnlichError;
use ahnlich_types::ai::{AIQuery, AIServerQuery, AIServerResponse, AIServerResult};
use ahnlich_types::bincode::{
    BinCodeSerAndDeser, LENGTH_HEADER_SIZE, MAGIC_BYTES, RESPONSE_HEADER_LEN, VERSION_LENGTH,
};
use deadpool::managed::{Manager, Metrics, RecycleError, RecycleResult};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Simple TCP connection to an ahnlich AI proxy host and port
#[derive(Debug)]
pub struct AIConn {
    stream: TcpStream,
}

impl AIConn {
    pub(crate) async fn new(host: &str, port: u16) -> Result<Self, AhnlichError> {
        let stream = TcpStream::connect(format!("{host}:{port}")).await?;
        Ok(Self { stream })
    }

    pub(crate) async fn is_conn_valid(&mut self) -> Result<(), AhnlichError> {
        let mut queries = AIServerQuery::with_capacity(1);
        queries.push(AIQuery::Ping);
        let response = self.send_query(queries).await?;
        let mut expected_response = AIServerResult::with_capacity(1);
        expected_response.push(Ok(AIServerResponse::Pong));
        if response != expected_response {
            return Err(AhnlichError::AIProxyError(format!("{:#?}", response)));
        }
        Ok(())
    }

    /// Writes an entire query batch to the stream and blocks until the
    /// matching result batch has been read back. One wire round trip per call
    pub(crate) async fn send_query(
        &mut self,
        query: AIServerQuery,
    ) -> Result<AIServerResult, AhnlichError> {
        let serialized_message = query.serialize()?;
        tracing::debug!("Sending batch of {} queries", query.len());
        self.stream.write_all(&serialized_message).await?;
        let response: AIServerResult = self.deserialize_from_stream().await?;
        tracing::debug!("Received batch of {} results", response.len());
        Ok(response)
    }

    async fn deserialize_from_stream<T: BinCodeSerAndDeser>(&mut self) -> Result<T, AhnlichError> {
        let mut header = [0u8; RESPONSE_HEADER_LEN];
        self.stream.read_exact(&mut header).await?;
        let mut length_header = [0u8; LENGTH_HEADER_SIZE];
        length_header.copy_from_slice(&header[MAGIC_BYTES.len() + VERSION_LENGTH..]);
        let data_length = u64::from_le_bytes(length_header);
        let mut response = vec![0u8; data_length as usize];
        self.stream.read_exact(&mut response).await?;
        let response = <T as BinCodeSerAndDeser>::deserialize(&response)?;
        Ok(response)
    }
}

/// TCP connection manager to the ahnlich AI proxy
#[derive(Debug)]
pub struct AIConnManager {
    host: String,
    port: u16,
}

impl AIConnManager {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }
}

#[async_trait::async_trait]
impl Manager for AIConnManager {
    type Type = AIConn;
    type Error = AhnlichError;

    async fn create(&self) -> Result<AIConn, AhnlichError> {
        AIConn::new(&self.host, self.port).await
    }

    async fn recycle(&self, conn: &mut AIConn, _metrics: &Metrics) -> RecycleResult<AhnlichError> {
        conn.is_conn_valid().await.map_err(RecycleError::Backend)
    }
}
