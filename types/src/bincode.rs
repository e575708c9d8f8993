use crate::version::VERSION;
use bincode::config::DefaultOptions;
use bincode::config::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const LENGTH_HEADER_SIZE: usize = 8;
pub const VERSION_LENGTH: usize = 5;
pub const MAGIC_BYTES: &[u8] = b"AHNLICH;";
pub const RESPONSE_HEADER_LEN: usize = MAGIC_BYTES.len() + VERSION_LENGTH + LENGTH_HEADER_SIZE;

/// Serialization and deserialization of queries and responses into bincode
///
/// - Int encoding must be fixed and not variable
/// - Endianness must be little endian
/// - Every message starts with the magic bytes, then the sender version, then
///   the length of the bincode payload as u64 before the payload itself
pub trait BinCodeSerAndDeser
where
    Self: Serialize + DeserializeOwned,
{
    fn serialize(&self) -> Result<Vec<u8>, bincode::Error> {
        let config = DefaultOptions::new()
            .with_fixint_encoding()
            .with_little_endian();
        let serialized_version = config.serialize(&*VERSION)?;
        let serialized_data = config.serialize(self)?;
        let data_length = serialized_data.len() as u64;
        let mut buffer = Vec::with_capacity(RESPONSE_HEADER_LEN + serialized_data.len());
        buffer.extend(MAGIC_BYTES);
        buffer.extend(&serialized_version);
        buffer.extend(&data_length.to_le_bytes());
        buffer.extend(&serialized_data);
        Ok(buffer)
    }

    /// expects the magic bytes and headers to have already been read off the
    /// stream, so only the payload remains
    fn deserialize(bytes: &[u8]) -> Result<Self, bincode::Error> {
        let config = DefaultOptions::new()
            .with_fixint_encoding()
            .with_little_endian();
        config.deserialize(bytes)
    }
}

pub trait BinCodeSerAndDeserQuery: BinCodeSerAndDeser {
    type Inner;

    fn into_inner(self) -> Self::Inner;

    fn get_traceparent(&self) -> Option<String>;
}

pub trait BinCodeSerAndDeserResponse: BinCodeSerAndDeser {
    fn from_error(err: String) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AIQuery, AIServerQuery};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialized_message_carries_magic_version_and_length() {
        let query = AIServerQuery::from_queries(&[AIQuery::Ping, AIQuery::ListStores]);
        let serialized = BinCodeSerAndDeser::serialize(&query).unwrap();
        assert_eq!(&serialized[..MAGIC_BYTES.len()], MAGIC_BYTES);
        let length_offset = MAGIC_BYTES.len() + VERSION_LENGTH;
        let mut length_header = [0u8; LENGTH_HEADER_SIZE];
        length_header.copy_from_slice(&serialized[length_offset..RESPONSE_HEADER_LEN]);
        let data_length = u64::from_le_bytes(length_header) as usize;
        assert_eq!(serialized.len(), RESPONSE_HEADER_LEN + data_length);
        let deserialized =
            AIServerQuery::deserialize(&serialized[RESPONSE_HEADER_LEN..]).unwrap();
        assert_eq!(deserialized, query);
    }
}
