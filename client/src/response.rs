//! Demultiplexing of a batched [`AIServerResult`] back into per-query
//! outcomes.
//!
//! Matching is purely positional: the Nth result entry belongs to the Nth
//! query of the batch that produced it. The tracing id plays no part here.

use crate::error::AhnlichError;
use ahnlich_types::ai::{AIServerResponse, AIServerResult};

/// Split a result batch into one outcome per submitted query, in wire order.
///
/// A result batch whose length differs from the submitted query count is a
/// corrupted response and fails the whole call; it is never truncated or
/// padded. Individual `Err` entries only fail their own position
pub(crate) fn into_outcomes(
    expected: usize,
    results: AIServerResult,
) -> Result<Vec<Result<AIServerResponse, AhnlichError>>, AhnlichError> {
    let results = results.into_inner();
    if results.len() != expected {
        return Err(AhnlichError::ResponseMismatch {
            expected,
            got: results.len(),
        });
    }
    Ok(results
        .into_iter()
        .map(|res| res.map_err(AhnlichError::AIProxyError))
        .collect())
}

/// Unwrap the sole outcome of a single-query batch
pub(crate) fn into_single(results: AIServerResult) -> Result<AIServerResponse, AhnlichError> {
    if results.len() != 1 {
        return Err(AhnlichError::ResponseMismatch {
            expected: 1,
            got: results.len(),
        });
    }
    let res = results
        .pop()
        .transpose()
        .map_err(AhnlichError::AIProxyError)?;
    res.ok_or(AhnlichError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_length_mismatch_fails_the_whole_call() {
        let mut results = AIServerResult::with_capacity(2);
        results.push(Ok(AIServerResponse::Unit));
        results.push(Ok(AIServerResponse::Pong));
        let err = into_outcomes(3, results).unwrap_err();
        assert!(matches!(
            err,
            AhnlichError::ResponseMismatch {
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn test_sibling_outcomes_survive_a_failed_entry() {
        let mut results = AIServerResult::with_capacity(3);
        results.push(Ok(AIServerResponse::Unit));
        results.push(Err("Store Main already exists".to_string()));
        results.push(Ok(AIServerResponse::Del(1)));
        let outcomes = into_outcomes(3, results).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].as_ref().unwrap(), &AIServerResponse::Unit);
        assert!(matches!(
            outcomes[1],
            Err(AhnlichError::AIProxyError(ref message)) if message == "Store Main already exists"
        ));
        assert_eq!(outcomes[2].as_ref().unwrap(), &AIServerResponse::Del(1));
    }

    #[test]
    fn test_single_unwrap_returns_the_sole_outcome() {
        let mut results = AIServerResult::with_capacity(1);
        results.push(Ok(AIServerResponse::Pong));
        assert_eq!(into_single(results).unwrap(), AIServerResponse::Pong);
    }

    #[test]
    fn test_single_unwrap_surfaces_the_sole_failure() {
        let mut results = AIServerResult::with_capacity(1);
        results.push(Err("Store Main not found".to_string()));
        assert!(matches!(
            into_single(results),
            Err(AhnlichError::AIProxyError(ref message)) if message == "Store Main not found"
        ));
    }

    #[test]
    fn test_single_unwrap_rejects_an_empty_result() {
        let results = AIServerResult::with_capacity(0);
        assert!(matches!(
            into_single(results),
            Err(AhnlichError::ResponseMismatch {
                expected: 1,
                got: 0
            })
        ));
    }
}
